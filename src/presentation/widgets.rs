//! Reusable widgets

pub mod counter_card;
