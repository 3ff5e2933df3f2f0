//! Elm-like update function
//!
//! Produces the next state from the current state and a message. This is
//! the only place a new `AppState` snapshot is constructed during normal
//! operation; the runner stores whatever comes back and re-renders when it
//! differs from the stored snapshot.

use crate::core::{msg::Msg, state::AppState};

/// Pure state transition. `Increment` yields a snapshot with `count + 1`;
/// messages that do not touch the counter return the state unchanged.
/// Exactly one new snapshot per `Increment`, never more.
pub fn update(msg: Msg, state: AppState) -> AppState {
    match msg {
        Msg::Increment => state.incremented(),

        // Host-level messages are acted on by the runner, not the model.
        Msg::Quit => state,
    }
}
