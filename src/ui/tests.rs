use super::*;
use crate::announce::RegionSnapshot;
use crate::app::{Message, Model, Screen, sample_notes, update};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::{Color, Modifier};

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(60, 20);
    Terminal::new(backend).unwrap()
}

fn create_test_model(count: usize) -> Model {
    Model::new(sample_notes(count, 0), (60, 20))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_list_rows_leave_room_for_chrome() {
    assert_eq!(list_rows(20), 16);
    assert_eq!(list_rows(2), 0);
    let inner = list_inner_area(Rect::new(0, 0, 60, 20));
    assert_eq!(inner, Rect::new(1, 1, 58, 16));
}

#[test]
fn test_render_list_shows_notes_and_selection() {
    let model = create_test_model(5);
    let mut terminal = create_test_terminal();
    terminal
        .draw(|frame| render(&model, &RegionSnapshot::default(), frame))
        .unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Notes (5)"));
    assert!(content.contains(">  Groceries #1"));
    assert!(content.contains("Standup #2"));
    assert!(content.contains("Note 1/5"));
}

#[test]
fn test_render_places_regions_above_status_bar() {
    let model = create_test_model(3);
    let regions = RegionSnapshot {
        polite: "Row 3 selected".to_string(),
        assertive: "Network timeout".to_string(),
        writes: 2,
    };
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, &regions, frame)).unwrap();

    let region_row = row_text(&terminal, 18);
    assert!(region_row.starts_with("Row 3 selected"));
    assert!(region_row.contains("Network timeout"));
    assert!(row_text(&terminal, 19).contains("hark"));
}

#[test]
fn test_hidden_regions_blend_into_background() {
    let model = create_test_model(3);
    let regions = RegionSnapshot {
        polite: "Loading notes...".to_string(),
        ..RegionSnapshot::default()
    };
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, &regions, frame)).unwrap();

    let cell = &terminal.backend().buffer()[(0, 18)];
    assert_eq!(cell.symbol(), "L", "text stays in the buffer");
    assert_eq!(cell.bg, Color::Reset);
    assert!(cell.modifier.contains(Modifier::HIDDEN));
}

#[test]
fn test_visible_regions_are_labelled() {
    let model = update(create_test_model(3), Message::ToggleRegions);
    let regions = RegionSnapshot {
        polite: "Notes loaded".to_string(),
        ..RegionSnapshot::default()
    };
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, &regions, frame)).unwrap();
    assert!(row_text(&terminal, 18).starts_with("[status] Notes loaded"));
    assert!(row_text(&terminal, 18).contains("[alert]"));
}

#[test]
fn test_virtualized_list_renders_rows_near_viewport() {
    let mut model = create_test_model(500);
    assert!(model.is_virtualized());
    model = update(model, Message::SelectRow(250));
    let mut terminal = create_test_terminal();
    terminal
        .draw(|frame| render(&model, &RegionSnapshot::default(), frame))
        .unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("#251"), "selected row is on screen");
    assert!(!content.contains("Groceries #1 "), "first row scrolled away");
    assert!(content.contains("[virtualized]"));
}

#[test]
fn test_detail_screen_shows_note_body() {
    let model = update(create_test_model(3), Message::OpenSelected);
    assert_eq!(model.screen, Screen::Detail(0));
    let mut terminal = create_test_terminal();
    terminal
        .draw(|frame| render(&model, &RegionSnapshot::default(), frame))
        .unwrap();
    let content = buffer_text(&terminal);
    assert!(content.contains("Groceries #1"));
    assert!(content.contains("revision 1"));
    assert!(content.contains("[reading]"));
}

#[test]
fn test_pull_indicator_pushes_list_down() {
    let mut model = create_test_model(3);
    model = update(model, Message::PullStart(1));
    model = update(model, Message::PullMove(11));
    let mut terminal = create_test_terminal();
    terminal
        .draw(|frame| render(&model, &RegionSnapshot::default(), frame))
        .unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Release to refresh"));
    assert!(!row_text(&terminal, 1).contains("Groceries"));
}

#[test]
fn test_empty_list_message() {
    let model = create_test_model(0);
    let mut terminal = create_test_terminal();
    terminal
        .draw(|frame| render(&model, &RegionSnapshot::default(), frame))
        .unwrap();
    let content = buffer_text(&terminal);
    assert!(content.contains("No notes yet"));
    assert!(content.contains("No notes"));
}

#[test]
fn test_help_overlay_lists_region_toggle() {
    let model = update(create_test_model(3), Message::ToggleHelp);
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|frame| render(&model, &RegionSnapshot::default(), frame))
        .unwrap();
    let content = buffer_text(&terminal);
    assert!(content.contains("Show / hide live regions"));
}

#[test]
fn test_list_layout_reserves_indicator_rows() {
    let idle = create_test_model(30);
    let inner = list_inner_area(Rect::new(0, 0, 60, 20));
    let layout = list_layout(&idle, inner);
    assert_eq!(layout.indicator.height, 0);
    assert_eq!(layout.rows, inner);
    assert_eq!(layout.index_at(1), Some(0));

    let refreshing = update(create_test_model(30), Message::Refresh);
    let layout = list_layout(&refreshing, inner);
    assert_eq!(layout.indicator.height, 3);
    assert_eq!(layout.rows.y, 4);
    assert_eq!(layout.rows.height, 13);
    assert_eq!(layout.index_at(1), None);
    assert_eq!(layout.index_at(4), Some(0));
}
