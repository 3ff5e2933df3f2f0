//! Cached counter view
//!
//! Explicit memoized-render wrapper: caches the last value together with
//! the composed text and reuses it when the value is unchanged. This is
//! purely an optimization; on screen it is indistinguishable from
//! [`PlainCounter`](super::plain_counter::PlainCounter).

use ratatui::prelude::*;

use super::CounterView;
use crate::presentation::widgets::counter_card::{compose, CounterCard};

#[derive(Debug, Clone, Default)]
pub struct CachedCounter {
    cache: Option<(u64, Text<'static>)>,
    computed: usize,
}

impl CachedCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterView for CachedCounter {
    fn view(&mut self, value: u64, frame: &mut Frame<'_>, area: Rect) {
        let stale = !matches!(&self.cache, Some((cached, _)) if *cached == value);
        if stale {
            self.cache = Some((value, compose(value)));
            self.computed += 1;
        }

        // The cache is filled above on any miss.
        if let Some((_, text)) = &self.cache {
            frame.render_widget(CounterCard::new(text.clone()), area);
        }
    }

    fn computed_renders(&self) -> usize {
        self.computed
    }
}
