use ratatui::style::Color;

use crate::settings::Settings;
use crate::state::State;
use crate::util::scale;

pub const CALM_BACKGROUND: Color = Color::Rgb(220, 220, 220); // gainsboro
pub const ANNOYED_BACKGROUND: Color = Color::Red;
pub const CALM_STATUS: Color = Color::Gray;
pub const ANNOYED_STATUS: Color = Color::White;

pub const NORMAL_TEXT_SIZE: u16 = 24;
pub const LARGE_TEXT_SIZE: u16 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    Heavy,
}

/// Visual properties the render pass applies, derived from a state snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance<'a> {
    pub background: Color,
    pub status_color: Color,
    pub text_color: Color,
    pub weight: FontWeight,
    pub size: u16,
    pub wiggle: bool,
    pub status: &'a str,
}

impl<'a> Appearance<'a> {
    pub fn of(state: &State, settings: &'a Settings) -> Self {
        if state.annoying {
            Self {
                background: ANNOYED_BACKGROUND,
                status_color: ANNOYED_STATUS,
                text_color: Color::Black,
                weight: FontWeight::Heavy,
                size: LARGE_TEXT_SIZE,
                wiggle: true,
                status: settings.warning(state.random_index),
            }
        } else {
            Self {
                background: CALM_BACKGROUND,
                status_color: CALM_STATUS,
                text_color: Color::Black,
                weight: FontWeight::Light,
                size: NORMAL_TEXT_SIZE,
                wiggle: false,
                status: settings.warning(0),
            }
        }
    }

    /// Blank cells placed between glyphs to fake a bigger font.
    pub fn letter_spacing(&self) -> usize {
        scale(
            self.size as f64,
            NORMAL_TEXT_SIZE as f64,
            LARGE_TEXT_SIZE as f64,
        )
        .round() as usize
    }
}
