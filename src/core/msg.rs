//! Domain messages
//!
//! Messages represent application intent after raw input has been
//! translated. They are serde-serializable so the keybinding configuration
//! can name them directly.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Domain messages processed by the update function and the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Msg {
    /// An activation event landed on one of the counter views.
    Increment,
    /// Leave the application.
    Quit,
}

impl Msg {
    /// Helper to exclude frequent messages during debugging. Domain
    /// messages are never frequent (raw messages carry Tick/Render).
    pub fn is_frequent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::Increment.is_frequent());
        assert!(!Msg::Quit.is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Increment, Msg::Increment);
        assert_ne!(Msg::Increment, Msg::Quit);
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Increment;
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
