//! Live-region widget.
//!
//! Terminal screen readers read what is in the cell buffer, so a region is
//! "screen-reader only" when its text is written but concealed: the
//! terminal's own colours with the hidden attribute, which blends into any
//! theme. Visible mode labels each region with its role for debugging.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

use crate::announce::Politeness;

fn hidden_style() -> Style {
    Style::default()
        .fg(Color::Reset)
        .bg(Color::Reset)
        .add_modifier(Modifier::HIDDEN)
}

#[derive(Debug, Clone)]
pub struct LiveRegion<'a> {
    politeness: Politeness,
    text: &'a str,
    visible: bool,
}

impl<'a> LiveRegion<'a> {
    pub const fn new(politeness: Politeness, text: &'a str) -> Self {
        Self {
            politeness,
            text,
            visible: false,
        }
    }

    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    fn label(&self) -> String {
        format!("[{}] ", self.politeness.role())
    }

    fn visible_style(&self) -> Style {
        match self.politeness {
            Politeness::Polite => Style::default().fg(Color::White).bg(Color::DarkGray),
            Politeness::Assertive => Style::default().fg(Color::White).bg(Color::Red),
        }
    }
}

impl Widget for LiveRegion<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = if self.visible {
            self.visible_style()
        } else {
            hidden_style()
        };
        buf.set_style(area, style);

        let mut line = String::new();
        if self.visible {
            line.push_str(&self.label());
        }
        line.push_str(self.text);
        let line = truncate_to_width(&line, area.width as usize);
        buf.set_stringn(area.x, area.y, line, area.width as usize, style);
    }
}

/// Longest prefix of `s` that fits in `width` columns.
fn truncate_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}
