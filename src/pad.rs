use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::animation::Wiggle;
use crate::debounce::should_handle;
use crate::messages::pick_warning_index;
use crate::scheduler::{Scheduler, TimerId};
use crate::settings::Settings;
use crate::state::{CapturedKey, State, StateUpdate};
use crate::surface::TextSurface;

/// Work deferred to a later frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    CalmDown,
}

/// What a key press did to the pad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dropped because the pad is already annoyed
    Suppressed,
    /// Arrived too soon after the previous key and set the pad off
    Annoyed { index: usize },
    /// An ignored key such as Tab or an arrow
    Skipped,
    Typed(char),
    Deleted,
    NewLine,
    /// Neither text nor an ignored key (function keys, Ctrl/Alt chords, ...)
    Unhandled,
}

/// The typing pad: owns the state snapshot, the text surface and pending timers.
#[derive(Debug)]
pub struct Pad {
    state: State,
    settings: Settings,
    surface: TextSurface,
    scheduler: Scheduler<Deferred>,
    calm_timer: Option<TimerId>,
    wiggle: Wiggle,
    rng: StdRng,
}

impl Pad {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    pub fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let surface = TextSurface::new(settings.cursor());
        Self {
            state: State::default(),
            settings,
            surface,
            scheduler: Scheduler::new(),
            calm_timer: None,
            wiggle: Wiggle::new(),
            rng,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &TextSurface {
        &self.surface
    }

    pub fn wiggle(&self) -> &Wiggle {
        &self.wiggle
    }

    pub fn is_annoyed(&self) -> bool {
        self.state.annoying
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// The only way state changes: merge `update` into a fresh snapshot.
    pub fn update_state(&mut self, update: StateUpdate) {
        self.state = self.state.merge(update);
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        if self.state.annoying {
            return KeyOutcome::Suppressed;
        }

        if !should_handle(now, self.state.last_pressed, self.settings.threshold()) {
            return self.annoy(now);
        }

        self.update_state(StateUpdate::default().annoying(false));

        let outcome = if self.settings.is_ignored(&key.code) {
            KeyOutcome::Skipped
        } else {
            self.surface.remove_cursor();
            let outcome = self.edit(key);
            self.surface.add_cursor();
            outcome
        };

        self.update_state(StateUpdate::default().last_pressed(now));
        debug!(?outcome, "key handled");
        outcome
    }

    fn annoy(&mut self, now: Instant) -> KeyOutcome {
        let index = pick_warning_index(&mut self.rng, self.settings.warnings().len());
        self.surface.remove_cursor();
        self.update_state(StateUpdate::default().annoying(true).random_index(index));

        let due = now + self.settings.revert_delay();
        self.calm_timer = Some(self.scheduler.schedule(due, Deferred::CalmDown));
        info!(
            mood = %self.state.mood(),
            index,
            delay_ms = self.settings.revert_delay().as_millis() as u64,
            "typing too fast, annoyed"
        );
        KeyOutcome::Annoyed { index }
    }

    fn edit(&mut self, key: KeyEvent) -> KeyOutcome {
        // Ctrl/Alt chords are commands, not text
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return KeyOutcome::Unhandled;
        }

        match key.code {
            KeyCode::Backspace => {
                let mut keys = self.state.keys.clone();
                keys.pop();
                self.update_state(StateUpdate::default().keys(keys));
                self.surface.delete_last();
                KeyOutcome::Deleted
            }
            KeyCode::Enter => {
                self.surface.push_line_break();
                KeyOutcome::NewLine
            }
            KeyCode::Char(c) => {
                let mut keys = self.state.keys.clone();
                keys.push(CapturedKey { key: c });
                self.update_state(StateUpdate::default().keys(keys));
                self.surface.push_char(c);
                KeyOutcome::Typed(c)
            }
            _ => KeyOutcome::Unhandled,
        }
    }

    /// Run once per display frame: fire due timers and advance the wiggle.
    pub fn on_frame(&mut self, now: Instant) {
        for task in self.scheduler.take_due(now) {
            match task {
                Deferred::CalmDown => self.calm_down(),
            }
        }

        if self.wiggle.is_active() != self.state.annoying {
            self.wiggle.set_active(self.state.annoying);
        }
        self.wiggle.update();
    }

    fn calm_down(&mut self) {
        self.calm_timer = None;
        self.update_state(StateUpdate::default().annoying(false));
        self.surface.add_cursor();
        info!(mood = %self.state.mood(), "calmed down");
    }

    /// Cancel anything still pending. Call before exiting.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.calm_timer.take() {
            self.scheduler.cancel(id);
        }
        if !self.scheduler.is_empty() {
            let dropped = self.scheduler.cancel_all();
            debug!(dropped, "cancelled leftover timers");
        }
    }
}
