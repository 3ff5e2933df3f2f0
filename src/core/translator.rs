//! Raw-to-domain translation
//!
//! Translates raw terminal events into domain messages. This is pure: the
//! keybinding table and the click targets recorded by the last render are
//! passed in, nothing is mutated.

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::{core::msg::Msg, core::raw_msg::RawMsg, presentation::config::KeyBindings};

/// Screen regions that accept an activation click.
///
/// The composer records the pane of each counter view here on every render;
/// a left-button press inside any recorded pane counts as an activation.
/// Before the first render the list is empty and clicks fall through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTargets {
    panes: Vec<Rect>,
}

impl ClickTargets {
    pub fn new(panes: Vec<Rect>) -> Self {
        Self { panes }
    }

    pub fn hit(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.panes.iter().any(|pane| pane.contains(position))
    }
}

/// Translates raw external events into domain messages.
pub fn translate_raw_to_domain(
    raw: RawMsg,
    keybindings: &KeyBindings,
    targets: &ClickTargets,
) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::Quit],

        // Keyboard input resolves through the configured bindings.
        RawMsg::Key(key) => keybindings
            .get(&vec![key])
            .map(|msg| vec![*msg])
            .unwrap_or_default(),

        // Only the occurrence of a click on a counter pane matters; the
        // rest of the payload is ignored.
        RawMsg::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if targets.hit(mouse.column, mouse.row) => {
                vec![Msg::Increment]
            }
            _ => vec![],
        },

        RawMsg::Error(error) => {
            log::error!("{error}");
            vec![]
        }

        // Frequent system events carry no domain meaning.
        RawMsg::Tick | RawMsg::Render | RawMsg::Resize(_, _) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn test_bindings() -> KeyBindings {
        KeyBindings::defaults()
    }

    fn test_targets() -> ClickTargets {
        ClickTargets::new(vec![Rect::new(0, 0, 10, 5), Rect::new(10, 0, 10, 5)])
    }

    fn left_click(column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_raw_translates_to_quit() {
        let msgs = translate_raw_to_domain(RawMsg::Quit, &test_bindings(), &test_targets());
        assert_eq!(msgs, vec![Msg::Quit]);
    }

    #[rstest]
    #[case(KeyCode::Char(' '), Msg::Increment)]
    #[case(KeyCode::Enter, Msg::Increment)]
    #[case(KeyCode::Char('q'), Msg::Quit)]
    fn test_default_key_bindings(#[case] code: KeyCode, #[case] expected: Msg) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let msgs = translate_raw_to_domain(RawMsg::Key(key), &test_bindings(), &test_targets());
        assert_eq!(msgs, vec![expected]);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let msgs = translate_raw_to_domain(RawMsg::Key(key), &test_bindings(), &test_targets());
        assert_eq!(msgs, vec![Msg::Quit]);
    }

    #[test]
    fn test_unbound_key_produces_nothing() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let msgs = translate_raw_to_domain(RawMsg::Key(key), &test_bindings(), &test_targets());
        assert!(msgs.is_empty());
    }

    #[rstest]
    #[case(3, 2)] // left pane
    #[case(15, 4)] // right pane
    fn test_click_on_either_pane_increments(#[case] column: u16, #[case] row: u16) {
        let msgs = translate_raw_to_domain(left_click(column, row), &test_bindings(), &test_targets());
        assert_eq!(msgs, vec![Msg::Increment]);
    }

    #[test]
    fn test_click_outside_panes_is_ignored() {
        let msgs = translate_raw_to_domain(left_click(50, 20), &test_bindings(), &test_targets());
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_click_before_first_render_is_ignored() {
        let msgs =
            translate_raw_to_domain(left_click(0, 0), &test_bindings(), &ClickTargets::default());
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_mouse_move_is_not_an_activation() {
        let raw = RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        let msgs = translate_raw_to_domain(raw, &test_bindings(), &test_targets());
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_tick_and_render_produce_nothing() {
        assert!(translate_raw_to_domain(RawMsg::Tick, &test_bindings(), &test_targets()).is_empty());
        assert!(
            translate_raw_to_domain(RawMsg::Render, &test_bindings(), &test_targets()).is_empty()
        );
    }
}
