use ratatui::prelude::*;

use crate::gesture::IndicatorGeometry;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
/// Arrow turning from pointing down (0°) to pointing up (180°).
const ARROWS: [&str; 5] = ["↓", "↙", "←", "↖", "↑"];

/// Pull-to-refresh indicator drawn above the list.
#[derive(Debug, Clone, Copy)]
pub struct PullIndicator {
    geometry: IndicatorGeometry,
    spinner_frame: usize,
}

impl PullIndicator {
    pub const fn new(geometry: IndicatorGeometry, spinner_frame: usize) -> Self {
        Self {
            geometry,
            spinner_frame,
        }
    }

    fn glyph(&self) -> &'static str {
        if self.geometry.refreshing {
            return SPINNER[self.spinner_frame % SPINNER.len()];
        }
        // Rotation is within 0..=180.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step = (self.geometry.rotation_deg / 45.0).round() as usize;
        ARROWS[step.min(ARROWS.len() - 1)]
    }

    fn style(&self) -> Style {
        let base = if self.geometry.show_release_hint {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Cyan)
        };
        if self.geometry.opacity < 1.0 {
            base.add_modifier(Modifier::DIM)
        } else {
            base
        }
    }
}

impl Widget for PullIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut text = self.glyph().to_string();
        if self.geometry.refreshing {
            text.push_str(" Refreshing");
        } else if self.geometry.show_release_hint {
            text.push_str(" Release to refresh");
        }
        // Bottom row of the indicator, centred, next to the list.
        let line = Line::styled(text, self.style()).centered();
        let row = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        line.render(row, buf);
    }
}
