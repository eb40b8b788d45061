//! Templated announcements for common UI events.

use super::{Announcer, Politeness};

/// A common UI event and the words used to announce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    /// "Loading {item}..."
    Loading(&'a str),
    /// "{item} loaded"
    Loaded(&'a str),
    /// The message as-is, interrupting.
    Error(&'a str),
    Success(&'a str),
    /// "Navigated to {destination}"
    Navigation(&'a str),
    /// "{item} selected"
    Selection(&'a str),
    Action(&'a str),
}

impl Notice<'_> {
    pub fn text(&self) -> String {
        match *self {
            Self::Loading(item) => format!("Loading {item}..."),
            Self::Loaded(item) => format!("{item} loaded"),
            Self::Navigation(destination) => format!("Navigated to {destination}"),
            Self::Selection(item) => format!("{item} selected"),
            Self::Error(message) | Self::Success(message) | Self::Action(message) => {
                message.to_string()
            }
        }
    }

    pub const fn politeness(&self) -> Politeness {
        match self {
            Self::Error(_) => Politeness::Assertive,
            _ => Politeness::Polite,
        }
    }
}

impl Announcer {
    pub fn notify(&self, notice: Notice<'_>) {
        self.announce(notice.text(), notice.politeness());
    }

    pub fn announce_loading(&self, item: &str) {
        self.notify(Notice::Loading(item));
    }

    pub fn announce_loaded(&self, item: &str) {
        self.notify(Notice::Loaded(item));
    }

    pub fn announce_error(&self, message: &str) {
        self.notify(Notice::Error(message));
    }

    pub fn announce_success(&self, message: &str) {
        self.notify(Notice::Success(message));
    }

    pub fn announce_navigation(&self, destination: &str) {
        self.notify(Notice::Navigation(destination));
    }

    pub fn announce_selection(&self, item: &str) {
        self.notify(Notice::Selection(item));
    }

    pub fn announce_action(&self, action: &str) {
        self.notify(Notice::Action(action));
    }
}
