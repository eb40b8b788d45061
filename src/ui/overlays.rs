use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Navigation", section_style));
    lines.push(Line::raw("  j/k or Up/Down      Select note"));
    lines.push(Line::raw("  Space / b           Page down / up"));
    lines.push(Line::raw("  g / G               First / last"));
    lines.push(Line::raw("  Enter               Open note"));
    lines.push(Line::raw("  Esc                 Back to list"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Notes", section_style));
    lines.push(Line::raw("  p                   Pin / unpin"));
    lines.push(Line::raw("  s                   Save"));
    lines.push(Line::raw("  e                   Simulate a failed save"));
    lines.push(Line::raw("  r / F5              Refresh"));
    lines.push(Line::raw("  Drag down at top    Pull to refresh"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Accessibility", section_style));
    lines.push(Line::raw("  v                   Show / hide live regions"));
    lines.push(Line::raw("  q / Ctrl-c          Quit"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));
    lines.push(Line::raw(""));
    lines.push(Line::styled("any key closes", dim_style));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
