use std::path::PathBuf;

use crate::announce::Announcer;
use crate::gesture::PullToRefresh;
use crate::virtualize::{DEFAULT_VIRTUALIZE_THRESHOLD, ListViewport, should_virtualize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub pinned: bool,
}

const TOPICS: [&str; 8] = [
    "Groceries",
    "Standup",
    "Reading list",
    "Trip ideas",
    "Recipe",
    "Bug triage",
    "Gift ideas",
    "Journal",
];

/// Deterministic notes for the list. `generation` changes the bodies so a
/// refresh visibly reloads.
pub fn sample_notes(count: usize, generation: u32) -> Vec<Note> {
    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            Note {
                title: format!("{topic} #{}", i + 1),
                body: format!(
                    "{topic} notes, revision {}.\n\nPress s to save, p to pin, Esc to go back.",
                    generation + 1
                ),
                pinned: false,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    /// Reading the note at this index.
    Detail(usize),
}

/// The complete application state.
///
/// The live regions themselves are owned by the provider in the event
/// loop; the model only holds a handle to announce through.
#[derive(Debug, Default)]
pub struct Model {
    pub notes: Vec<Note>,
    /// Index of the highlighted note
    pub selected: usize,
    /// Scroll state of the notes list
    pub viewport: ListViewport,
    pub screen: Screen,
    /// Terminal width in columns
    pub width: u16,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Draw live regions visibly (otherwise screen-reader only)
    pub show_regions: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    pub pull: PullToRefresh,
    pub virtualize_threshold: usize,
    /// Completed refreshes
    pub generation: u32,
    /// Spinner frame while refreshing
    pub spinner_frame: usize,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    pub announcer: Announcer,
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(notes: Vec<Note>, terminal_size: (u16, u16)) -> Self {
        let total = notes.len();
        Self {
            notes,
            viewport: ListViewport::new(crate::ui::list_rows(terminal_size.1), total),
            width: terminal_size.0,
            virtualize_threshold: DEFAULT_VIRTUALIZE_THRESHOLD,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_announcer(mut self, announcer: Announcer) -> Self {
        self.announcer = announcer;
        self
    }

    #[must_use]
    pub fn with_pull(mut self, pull: PullToRefresh) -> Self {
        self.pull = pull;
        self
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected)
    }

    pub fn is_virtualized(&self) -> bool {
        should_virtualize(self.notes.len(), self.virtualize_threshold)
    }

    /// Move the highlight to `index` (clamped) and announce it if it moved.
    pub(super) fn select(&mut self, index: usize) {
        let Some(last) = self.notes.len().checked_sub(1) else {
            return;
        };
        let index = index.min(last);
        if index == self.selected {
            return;
        }
        self.selected = index;
        self.viewport.ensure_visible(index);
        if let Some(note) = self.notes.get(index) {
            self.announcer.announce_selection(&note.title);
        }
    }

    /// Swap in freshly loaded notes, keeping pins and the selection.
    pub(super) fn replace_notes(&mut self, mut notes: Vec<Note>) {
        for (fresh, old) in notes.iter_mut().zip(&self.notes) {
            fresh.pinned = old.pinned;
        }
        self.notes = notes;
        self.viewport.set_total_rows(self.notes.len());
        self.selected = self.selected.min(self.notes.len().saturating_sub(1));
        if let Screen::Detail(index) = self.screen
            && index >= self.notes.len()
        {
            self.screen = Screen::List;
        }
    }
}
