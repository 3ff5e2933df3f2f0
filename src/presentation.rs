//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The two counter views and their shared contract
//! - Reusable widgets
//! - Keybinding configuration

pub mod components;
pub mod config;
pub mod widgets;
