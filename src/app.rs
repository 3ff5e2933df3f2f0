//! Application runner
//!
//! Owns the single `AppState` snapshot outside the view tree and drives the
//! event → translate → update → render cycle. Two states: idle-rendered
//! (the terminal reflects the current snapshot) and, transiently, updating
//! while a replacement is being stored and redrawn. Events are consumed
//! strictly in arrival order; anything delivered during a render waits in
//! the event source until the next loop iteration.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::{
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, TuiLike},
    },
    presentation::components::Components,
};

pub struct App {
    config: Config,
    state: AppState,
    components: Components,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>, events: EventSource) -> Self {
        Self {
            config,
            state: AppState::initial(),
            components: Components::new(),
            tui,
            events,
            should_quit: false,
        }
    }

    /// Current state snapshot, for tests and diagnostics.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Component tree, for tests that inspect render instrumentation.
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Run the main loop: enter the terminal, render once, then process
    /// events until quit (or until a test event queue runs dry).
    pub async fn run(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
        }

        self.render().await?;

        loop {
            let Some(event) = self.events.next().await else {
                break;
            };

            let raw = match event {
                tui::Event::Quit => Some(RawMsg::Quit),
                tui::Event::Tick => Some(RawMsg::Tick),
                tui::Event::Render => Some(RawMsg::Render),
                tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
                tui::Event::Key(key) => Some(RawMsg::Key(key)),
                tui::Event::Mouse(mouse) => Some(RawMsg::Mouse(mouse)),
                tui::Event::Error => Some(RawMsg::Error("event stream error".to_string())),
                tui::Event::Init => None,
            };

            if let Some(raw) = raw {
                if !raw.is_frequent() {
                    log::debug!("{raw:?}");
                }
                self.process(raw).await?;
            }

            if self.should_quit {
                break;
            }
        }

        let mut tui = self.tui.lock().await;
        tui.exit()?;
        Ok(())
    }

    async fn process(&mut self, raw: RawMsg) -> Result<()> {
        // Host-level frame events redraw without touching the model.
        match raw {
            RawMsg::Render => self.render().await?,
            RawMsg::Resize(w, h) => {
                {
                    let mut tui = self.tui.lock().await;
                    tui.resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                }
                self.render().await?;
            }
            _ => {}
        }

        let msgs =
            translate_raw_to_domain(raw, &self.config.keybindings, self.components.click_targets());
        for msg in msgs {
            log::info!("Got message: {msg}");
            match msg {
                Msg::Quit => self.should_quit = true,
                _ => {
                    let next = update(msg, self.state);
                    self.update_app_state(next).await?;
                }
            }
        }
        Ok(())
    }

    /// Single-slot publish: replace the stored snapshot, then synchronously
    /// re-render when it changed. This loop is the sole subscriber to state
    /// changes; one activation yields at most one replacement and one
    /// redraw.
    async fn update_app_state(&mut self, next: AppState) -> Result<()> {
        let changed = next != self.state;
        self.state = next;
        if changed {
            self.render().await?;
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let mut tui = self.tui.lock().await;
        let state = self.state;
        let components = &mut self.components;
        tui.draw(&mut |frame: &mut tui::Frame<'_>| components.render(frame, &state))?;
        Ok(())
    }
}
