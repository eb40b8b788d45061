// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. announce::AnnouncerConfig)
    clippy::module_name_repetitions
)]

//! # Hark
//!
//! A terminal notes list that speaks its state changes.
//!
//! Hark keeps two live regions on screen, one polite and one assertive,
//! that a screen reader watching the terminal reads out as their text
//! changes. Every part of the UI announces through a shared handle:
//! - Selection, navigation and note actions go to the polite region
//! - Failures go to the assertive region
//! - Both regions empty themselves a short while after the last write
//!
//! ## Architecture
//!
//! Hark uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: State transitions, announcing through the model's handle
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`announce`]: Live regions, the provider and announcer handles
//! - [`app`]: Main application loop and state
//! - [`config`]: Saved flag defaults
//! - [`env`]: Startup environment validation
//! - [`gesture`]: Pull-to-refresh state machine
//! - [`ui`]: Terminal UI components
//! - [`virtualize`]: Large-list viewport and windowing

pub mod announce;
pub mod app;
pub mod config;
pub mod env;
pub mod gesture;
pub mod ui;
pub mod virtualize;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::announce::{
        Announcement, Announcer, AnnouncerConfig, ClearPolicy, LiveRegionProvider, Politeness,
    };
    pub use crate::app::{App, Message, Model};
    pub use crate::virtualize::ListViewport;
}
