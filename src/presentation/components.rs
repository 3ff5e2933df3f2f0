//! Component collection and management
//!
//! Components are stateless renderers that receive the state snapshot as a
//! parameter during render. Two implementations of the same view contract
//! are composed side by side, bound to the same counter value and the same
//! increment path.

use ratatui::prelude::*;

use crate::core::{state::AppState, translator::ClickTargets};

pub mod cached_counter;
pub mod plain_counter;

pub use cached_counter::CachedCounter;
pub use plain_counter::PlainCounter;

/// The shared counter view contract.
///
/// Both implementations take the value per render call and never hold a
/// state snapshot. `computed_renders` counts how many times the view
/// actually recomposed its content, which is how render suppression is
/// observed in tests; the on-screen output is identical either way.
pub trait CounterView {
    fn view(&mut self, value: u64, frame: &mut Frame<'_>, area: Rect);

    fn computed_renders(&self) -> usize;
}

/// Collection of all components.
///
/// Splits the frame into two side-by-side panes, renders the cached view
/// on the left and the plain view on the right from the same `count`, and
/// records the pane rects as click targets so an activation on either pane
/// reaches the same increment path.
pub struct Components {
    pub cached: CachedCounter,
    pub plain: PlainCounter,
    targets: ClickTargets,
}

impl Components {
    pub fn new() -> Self {
        Self {
            cached: CachedCounter::new(),
            plain: PlainCounter::new(),
            targets: ClickTargets::default(),
        }
    }

    /// Render all components. The main rendering entry point.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(frame.area());

        self.cached.view(state.count, frame, panes[0]);
        self.plain.view(state.count, frame, panes[1]);

        self.targets = ClickTargets::new(panes.to_vec());
    }

    /// Click targets recorded by the last render. Empty before the first
    /// render, so early clicks have nothing to land on.
    pub fn click_targets(&self) -> &ClickTargets {
        &self.targets
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn draw(components: &mut Components, state: &AppState) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| components.render(frame, state))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_both_panes_show_the_same_value() {
        let mut components = Components::new();
        let buf = draw(&mut components, &AppState { count: 37 });

        let area = *buf.area();
        let half = usize::from(area.width / 2);
        let width = usize::from(area.width);
        let cells = buf.content();
        let half_text = |range: std::ops::Range<usize>| -> String {
            (0..usize::from(area.height))
                .flat_map(|y| range.clone().map(move |x| y * width + x))
                .map(|idx| cells[idx].symbol())
                .collect()
        };

        let left = half_text(0..half);
        let right = half_text(half..width);
        assert!(left.contains("37"));
        assert!(right.contains("37"));
    }

    #[test]
    fn test_render_records_two_click_targets() {
        let mut components = Components::new();
        assert_eq!(components.click_targets(), &ClickTargets::default());

        draw(&mut components, &AppState::initial());

        // One point in each half must now hit.
        assert!(components.click_targets().hit(5, 3));
        assert!(components.click_targets().hit(45, 3));
    }

    #[test]
    fn test_single_render_computes_each_view_once() {
        let mut components = Components::new();
        draw(&mut components, &AppState::initial());

        assert_eq!(components.cached.computed_renders(), 1);
        assert_eq!(components.plain.computed_renders(), 1);
    }
}
