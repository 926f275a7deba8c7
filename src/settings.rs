use crossterm::event::{KeyCode, ModifierKeyCode};
use std::time::Duration;

use crate::config::{Config, ConfigError};

/// Keys that count as a keystroke for the debounce gate but never edit the text.
pub const IGNORED_KEYS: [KeyCode; 14] = [
    KeyCode::Modifier(ModifierKeyCode::LeftSuper),
    KeyCode::Modifier(ModifierKeyCode::RightSuper),
    KeyCode::Modifier(ModifierKeyCode::LeftAlt),
    KeyCode::Modifier(ModifierKeyCode::RightAlt),
    KeyCode::Modifier(ModifierKeyCode::LeftShift),
    KeyCode::Modifier(ModifierKeyCode::RightShift),
    KeyCode::Tab,
    KeyCode::Modifier(ModifierKeyCode::LeftControl),
    KeyCode::Modifier(ModifierKeyCode::RightControl),
    KeyCode::CapsLock,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
];

/// Fixed parameters of a running pad. Built once, never changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    ignored_keys: Vec<KeyCode>,
    threshold: Duration,
    revert_factor: u32,
    warnings: Vec<String>,
    cursor: char,
}

impl Settings {
    pub fn is_ignored(&self, code: &KeyCode) -> bool {
        self.ignored_keys.contains(code)
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// How long the annoyance lasts before the pad calms down again.
    pub fn revert_delay(&self) -> Duration {
        self.threshold * self.revert_factor
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The string at `index`, or the calm string when out of range.
    pub fn warning(&self, index: usize) -> &str {
        self.warnings
            .get(index)
            .or_else(|| self.warnings.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn cursor(&self) -> char {
        self.cursor
    }
}

impl TryFrom<&Config> for Settings {
    type Error = ConfigError;

    fn try_from(cfg: &Config) -> Result<Self, Self::Error> {
        if cfg.threshold_ms == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if cfg.revert_factor == 0 {
            return Err(ConfigError::ZeroRevertFactor);
        }
        if cfg.warnings.len() < 2 {
            return Err(ConfigError::TooFewWarnings(cfg.warnings.len()));
        }

        Ok(Self {
            ignored_keys: IGNORED_KEYS.to_vec(),
            threshold: Duration::from_millis(cfg.threshold_ms),
            revert_factor: cfg.revert_factor,
            warnings: cfg.warnings.clone(),
            cursor: cfg.cursor,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignored_keys: IGNORED_KEYS.to_vec(),
            threshold: Duration::from_millis(crate::config::DEFAULT_THRESHOLD_MS),
            revert_factor: crate::config::DEFAULT_REVERT_FACTOR,
            warnings: crate::messages::DEFAULT_WARNINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cursor: crate::config::DEFAULT_CURSOR,
        }
    }
}
