use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::announce::RegionSnapshot;
use crate::app::{Model, Note, Screen};
use crate::virtualize::{DEFAULT_OVERSCAN, visible_window};

use super::{PullIndicator, list_layout, overlays, status};

/// Render the complete UI.
pub fn render(model: &Model, regions: &RegionSnapshot, frame: &mut Frame) {
    let area = frame.area();
    let [main, region_row, status_row] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    match model.screen {
        Screen::List => render_list(model, frame, main),
        Screen::Detail(index) => match model.notes.get(index) {
            Some(note) => render_note(note, frame, main),
            None => render_list(model, frame, main),
        },
    }

    status::render_live_regions(model, regions, frame, region_row);
    status::render_status_bar(model, frame, status_row);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_list(model: &Model, frame: &mut Frame, area: Rect) {
    let title = if model.notes.is_empty() {
        "Notes".to_string()
    } else {
        format!("Notes ({})", model.notes.len())
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = list_layout(model, inner);
    if let Some(geometry) = model.pull.indicator() {
        frame.render_widget(
            PullIndicator::new(geometry, model.spinner_frame),
            layout.indicator,
        );
    }

    if model.notes.is_empty() {
        let empty = Paragraph::new("No notes yet. Press r to refresh.")
            .style(Style::default().fg(Color::Indexed(245)));
        frame.render_widget(empty, layout.rows);
        return;
    }

    let total = model.notes.len();
    let offset = layout.offset;
    // Small lists are laid out whole; large ones only around the viewport.
    let window = if model.is_virtualized() {
        visible_window(offset, layout.rows.height as usize, DEFAULT_OVERSCAN, total)
    } else {
        0..total
    };

    let lines: Vec<Line> = model.notes[window.clone()]
        .iter()
        .enumerate()
        .map(|(i, note)| note_line(note, window.start + i == model.selected))
        .collect();

    let scroll = u16::try_from(offset.saturating_sub(window.start)).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), layout.rows);
}

fn note_line(note: &Note, selected: bool) -> Line<'_> {
    let marker = if selected { ">" } else { " " };
    let pin = if note.pinned { "* " } else { "  " };
    let style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{pin}"), Style::default().fg(Color::Yellow)),
        Span::styled(note.title.as_str(), style),
    ])
}

fn render_note(note: &Note, frame: &mut Frame, area: Rect) {
    let title = if note.pinned {
        format!("{} (pinned)", note.title)
    } else {
        note.title.clone()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let body = Paragraph::new(note.body.as_str())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}
