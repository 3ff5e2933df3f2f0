//! Plain counter view
//!
//! Recomposes its output on every render call, whether or not the value
//! changed. The unconditional baseline the cached view is measured against.

use ratatui::prelude::*;

use super::CounterView;
use crate::presentation::widgets::counter_card::{compose, CounterCard};

#[derive(Debug, Clone, Default)]
pub struct PlainCounter {
    computed: usize,
}

impl PlainCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterView for PlainCounter {
    fn view(&mut self, value: u64, frame: &mut Frame<'_>, area: Rect) {
        let text = compose(value);
        self.computed += 1;
        frame.render_widget(CounterCard::new(text), area);
    }

    fn computed_renders(&self) -> usize {
        self.computed
    }
}
