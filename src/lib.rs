//! # Countui - a two-view counter TUI
//!
//! A terminal counter rendered by two alternate views of the same contract,
//! built with Ratatui and an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): the counter value; a new snapshot per update
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure state transitions
//! - **Translation** (`core::translator`): raw terminal input to messages
//! - **View** (`presentation`): stateless components rendering the snapshot
//! - **Runner** (`app`): owns the snapshot and drives the render cycle
//!
//! ## Example Usage
//!
//! ```rust
//! use countui::core::{msg::Msg, state::AppState, update::update};
//!
//! let state = AppState::initial();
//! let next = update(Msg::Increment, state);
//!
//! assert_eq!(state.count, 0); // prior snapshot untouched
//! assert_eq!(next.count, 1);
//! ```
//!
//! ## Key Features
//!
//! - **Two interchangeable views**: a cached renderer that skips
//!   recomputation for unchanged input and a plain renderer that always
//!   recomputes, with identical output
//! - **Predictable state management**: all changes go through the update
//!   function; the runner is the sole owner of the snapshot
//! - **Testable**: pure functions plus a `TestBackend` terminal seam

#![deny(warnings)]

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use core::msg::Msg;
pub use core::raw_msg::RawMsg;
pub use core::state::AppState;
pub use core::translator::translate_raw_to_domain;
pub use core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
