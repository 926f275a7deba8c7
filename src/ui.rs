use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::appearance::{Appearance, FontWeight};
use crate::pad::Pad;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &Pad {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let look = Appearance::of(self.state(), self.settings());

        // background first so every cell picks up the mood color
        Block::default()
            .style(Style::default().bg(look.background))
            .render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Min(1),    // typed text
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // status line
                ]
                .as_ref(),
            )
            .split(area);

        let text_style = match look.weight {
            FontWeight::Heavy => Style::default()
                .fg(look.text_color)
                .add_modifier(Modifier::BOLD),
            FontWeight::Light => Style::default().fg(look.text_color),
        };

        let rendered = self.surface().rendered();
        let mut spacing = look.letter_spacing();
        if spacing > 0 && widest_line(&widen(&rendered, spacing)) > chunks[0].width as usize {
            // the big font doesn't fit, keep the text readable instead
            spacing = 0;
        }

        let lines: Vec<Line> = widen(&rendered, spacing)
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();

        let offset = if look.wiggle {
            self.wiggle().offset()
        } else {
            0
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(shift(chunks[0], offset, area), buf);

        Paragraph::new(Span::styled(
            look.status,
            Style::default()
                .fg(look.status_color)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);
    }
}

/// Put `spacing` blanks between the glyphs of every line.
fn widen(text: &str, spacing: usize) -> String {
    if spacing == 0 {
        return text.to_string();
    }
    let gap = " ".repeat(spacing);
    text.split('\n')
        .map(|line| {
            line.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn widest_line(text: &str) -> usize {
    text.split('\n').map(|l| l.width()).max().unwrap_or(0)
}

/// Move `rect` sideways by `offset` cells without leaving `bounds`.
fn shift(rect: Rect, offset: i16, bounds: Rect) -> Rect {
    let x = (rect.x as i32 + offset as i32).max(0) as u16;
    Rect::new(x, rect.y, rect.width, rect.height).intersection(bounds)
}
