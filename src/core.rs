//! Core Elm architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages and raw messages
//! - Application state
//! - Pure update logic
//! - Raw-to-domain translation

pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
