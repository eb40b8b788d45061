use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::announce::{Politeness, RegionSnapshot};
use crate::app::{Model, Screen};

use super::LiveRegion;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let position = if model.notes.is_empty() {
        "No notes".to_string()
    } else {
        format!("Note {}/{}", model.selected + 1, model.notes.len())
    };
    let screen = match model.screen {
        Screen::List => "",
        Screen::Detail(_) => " [reading]",
    };
    let virtualized = if model.is_virtualized() {
        " [virtualized]"
    } else {
        ""
    };
    let refreshing = if model.pull.is_refreshing() {
        " [refreshing]"
    } else {
        ""
    };

    let status = format!(" hark  {position}{screen}{virtualized}{refreshing}  ?:help");
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

/// Both live regions side by side on one row.
pub fn render_live_regions(
    model: &Model,
    regions: &RegionSnapshot,
    frame: &mut Frame,
    area: Rect,
) {
    let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (politeness, half) in [Politeness::Polite, Politeness::Assertive]
        .into_iter()
        .zip(halves.iter())
    {
        frame.render_widget(
            LiveRegion::new(politeness, regions.text(politeness)).visible(model.show_regions),
            *half,
        );
    }
}
