//! Application state
//!
//! The whole model is a single counter value. Every update produces a new
//! snapshot; the previous snapshot is never mutated in place, so references
//! retained across an update keep reading the old value.

use serde::{Deserialize, Serialize};

/// Unified application state: the counter value shown by both views.
///
/// The unsigned type makes `count >= 0` a property of the model rather than
/// an emergent runtime fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub count: u64,
}

impl AppState {
    /// Fresh initial state. Every call returns an independent `{count: 0}`.
    pub fn initial() -> Self {
        Self { count: 0 }
    }

    /// Snapshot with the counter advanced by one. The receiver stays valid
    /// and unchanged.
    pub fn incremented(&self) -> Self {
        Self {
            count: self.count + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_initial_state_is_zero() {
        let state = AppState::initial();
        assert_eq!(state.count, 0);
    }

    #[test]
    #[allow(unused_variables, unused_assignments)]
    fn test_initial_calls_are_independent() {
        let mut first = AppState::initial();
        let second = AppState::initial();

        first.count = 42;

        assert_eq!(second.count, 0);
        assert_eq!(AppState::initial().count, 0);
    }

    #[test]
    fn test_default_matches_initial() {
        assert_eq!(AppState::default(), AppState::initial());
    }

    #[test]
    fn test_incremented_leaves_receiver_unchanged() {
        let before = AppState { count: 7 };
        let after = before.incremented();

        assert_eq!(before.count, 7);
        assert_eq!(after.count, 8);
    }
}
