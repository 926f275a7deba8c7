use std::time::Instant;

use strum_macros::Display;

/// A key captured into the typed sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapturedKey {
    pub key: char,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Mood {
    Normal,
    Annoyed,
}

/// Snapshot of everything that changes while the pad runs.
///
/// Snapshots are never edited; [`State::merge`] builds the next one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub keys: Vec<CapturedKey>,
    pub last_pressed: Option<Instant>,
    pub annoying: bool,
    pub random_index: usize,
}

impl State {
    pub fn mood(&self) -> Mood {
        if self.annoying {
            Mood::Annoyed
        } else {
            Mood::Normal
        }
    }

    /// A new snapshot with the fields present in `update` replaced.
    pub fn merge(&self, update: StateUpdate) -> State {
        State {
            keys: update.keys.unwrap_or_else(|| self.keys.clone()),
            last_pressed: update.last_pressed.or(self.last_pressed),
            annoying: update.annoying.unwrap_or(self.annoying),
            random_index: update.random_index.unwrap_or(self.random_index),
        }
    }
}

/// Partial change to a [`State`]; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateUpdate {
    pub keys: Option<Vec<CapturedKey>>,
    pub last_pressed: Option<Instant>,
    pub annoying: Option<bool>,
    pub random_index: Option<usize>,
}

impl StateUpdate {
    pub fn keys(mut self, keys: Vec<CapturedKey>) -> Self {
        self.keys = Some(keys);
        self
    }

    pub fn last_pressed(mut self, at: Instant) -> Self {
        self.last_pressed = Some(at);
        self
    }

    pub fn annoying(mut self, annoying: bool) -> Self {
        self.annoying = Some(annoying);
        self
    }

    pub fn random_index(mut self, idx: usize) -> Self {
        self.random_index = Some(idx);
        self
    }
}
