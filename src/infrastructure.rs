//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (the mount point)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
