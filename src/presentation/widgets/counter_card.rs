//! Counter card widget
//!
//! The visual output shared by both counter views. Keeping the composition
//! in one place guarantees the two views stay indistinguishable on screen.

use ratatui::{prelude::*, widgets::*};

/// Compose the display text for a counter value.
///
/// This is the computation the cached view skips when its input has not
/// changed, so it must stay a pure function of `value`.
pub fn compose(value: u64) -> Text<'static> {
    Text::from(vec![
        Line::raw(""),
        Line::styled(value.to_string(), Style::new().bold()).centered(),
    ])
}

/// Bordered card that renders a previously composed counter text.
pub struct CounterCard<'a> {
    text: Text<'a>,
}

impl<'a> CounterCard<'a> {
    pub fn new(text: Text<'a>) -> Self {
        Self { text }
    }
}

impl Widget for CounterCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Counter")
            .title_bottom(Line::from("click or space to count".dim()).right_aligned());
        Paragraph::new(self.text).block(block).render(area, buf);
    }
}
