//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: State transitions (announcements are their only effect)
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, Note, Screen, sample_notes};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::announce::AnnouncerConfig;
use crate::gesture::DEFAULT_PULL_THRESHOLD;
use crate::virtualize::DEFAULT_VIRTUALIZE_THRESHOLD;

/// Number of sample notes shown when none is configured.
pub const DEFAULT_NOTE_COUNT: usize = 120;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    announcer_config: AnnouncerConfig,
    note_count: usize,
    virtualize_threshold: usize,
    pull_threshold: u16,
    show_regions: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    pub fn new(announcer_config: AnnouncerConfig) -> Self {
        Self {
            announcer_config,
            note_count: DEFAULT_NOTE_COUNT,
            virtualize_threshold: DEFAULT_VIRTUALIZE_THRESHOLD,
            pull_threshold: DEFAULT_PULL_THRESHOLD,
            show_regions: false,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Number of notes in the list.
    pub const fn with_note_count(mut self, count: usize) -> Self {
        self.note_count = count;
        self
    }

    /// Virtualize the list once it has more than `threshold` notes.
    pub const fn with_virtualize_threshold(mut self, threshold: usize) -> Self {
        self.virtualize_threshold = threshold;
        self
    }

    /// Rows of pull needed to trigger a refresh.
    pub const fn with_pull_threshold(mut self, threshold: u16) -> Self {
        self.pull_threshold = threshold;
        self
    }

    /// Draw the live regions visibly instead of screen-reader only.
    pub const fn with_show_regions(mut self, show: bool) -> Self {
        self.show_regions = show;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}
