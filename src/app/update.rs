use crate::app::{Model, Screen, sample_notes};
use crate::gesture::PullEvent;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Highlight the next note
    SelectNext,
    /// Highlight the previous note
    SelectPrev,
    /// Highlight the first note
    SelectFirst,
    /// Highlight the last note
    SelectLast,
    /// Move the highlight down one page
    PageDown,
    /// Move the highlight up one page
    PageUp,
    /// Highlight a note by index (mouse click)
    SelectRow(usize),
    /// Scroll the list without moving the highlight
    ScrollUp(usize),
    ScrollDown(usize),
    /// Open the highlighted note
    OpenSelected,
    /// Leave the note view (or close help)
    Back,

    // Note actions
    TogglePin,
    Save,
    /// Pretend a save failed, to exercise the assertive region
    SimulateSaveError,

    // Refresh
    /// Start a refresh from the keyboard
    Refresh,
    /// The reload finished
    RefreshComplete,
    /// Pointer pressed on the list at this row
    PullStart(u16),
    /// Pointer dragged to this row
    PullMove(u16),
    /// Pointer released
    PullEnd,
    /// Advance the refresh spinner
    Tick,

    // Window
    /// Toggle visible live regions
    ToggleRegions,
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Apply `msg` to `model`.
///
/// Announcements go out through `model.announcer`; with a detached
/// announcer this is a pure state transition.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::SelectNext => model.select(model.selected.saturating_add(1)),
        Message::SelectPrev => model.select(model.selected.saturating_sub(1)),
        Message::SelectFirst => model.select(0),
        Message::SelectLast => model.select(usize::MAX),
        Message::PageDown => {
            let page = model.viewport.height() as usize;
            model.select(model.selected.saturating_add(page.max(1)));
        }
        Message::PageUp => {
            let page = model.viewport.height() as usize;
            model.select(model.selected.saturating_sub(page.max(1)));
        }
        Message::SelectRow(index) => {
            // A click that never became a pull disarms the gesture.
            let _ = model.pull.end();
            if index < model.notes.len() {
                model.select(index);
            }
        }
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::OpenSelected => {
            if model.screen == Screen::List
                && let Some(note) = model.notes.get(model.selected)
            {
                model.screen = Screen::Detail(model.selected);
                model.announcer.announce_navigation(&note.title);
            }
        }
        Message::Back => {
            if model.help_visible {
                model.help_visible = false;
            } else if matches!(model.screen, Screen::Detail(_)) {
                model.screen = Screen::List;
                model.announcer.announce_navigation("Notes");
            }
        }
        Message::TogglePin => {
            if let Some(note) = model.notes.get_mut(model.selected) {
                note.pinned = !note.pinned;
                let verb = if note.pinned { "Pinned" } else { "Unpinned" };
                model
                    .announcer
                    .announce_action(&format!("{verb} {}", note.title));
            }
        }
        Message::Save => {
            if let Some(note) = model.selected_note() {
                model
                    .announcer
                    .announce_success(&format!("Saved {}", note.title));
            }
        }
        Message::SimulateSaveError => {
            model.announcer.announce_error("Save failed");
        }
        Message::Refresh => {
            if model.pull.begin_refresh() {
                model.spinner_frame = 0;
                model.announcer.announce_loading("notes");
            }
        }
        Message::RefreshComplete => {
            if model.pull.is_refreshing() {
                model.generation = model.generation.saturating_add(1);
                let notes = sample_notes(model.notes.len(), model.generation);
                model.replace_notes(notes);
                model.pull.finish_refresh();
                model.announcer.announce_loaded("Notes");
            }
        }
        Message::PullStart(row) => {
            let at_top = model.screen == Screen::List && model.viewport.is_at_top();
            model.pull.start(row, at_top);
        }
        Message::PullMove(row) => {
            if model.pull.move_to(row) == Some(PullEvent::ThresholdCrossed) {
                model.announcer.announce_action("Release to refresh");
            }
        }
        Message::PullEnd => {
            if model.pull.end() == Some(PullEvent::RefreshRequested) {
                model.spinner_frame = 0;
                model.announcer.announce_loading("notes");
            }
        }
        Message::Tick => {
            if model.pull.is_refreshing() {
                model.spinner_frame = model.spinner_frame.wrapping_add(1);
            }
        }
        Message::ToggleRegions => {
            model.show_regions = !model.show_regions;
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.viewport.resize(crate::ui::list_rows(height));
            model.viewport.ensure_visible(model.selected);
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
