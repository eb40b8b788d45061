//! Screen-reader announcements through two live regions.
//!
//! Producers call [`Announcer::announce`] (or one of the templated
//! builders in [`Notice`]) and the text lands in one of two slots:
//! - **polite**: read when the screen reader is idle (`role="status"`)
//! - **assertive**: interrupts whatever is being read (`role="alert"`)
//!
//! Every announcement (re)starts a clear timer. When it fires, the slots
//! go back to empty, so the next identical message is seen as a change by
//! assistive technology instead of being swallowed.
//!
//! The state lives in [`LiveRegions`], owned by a [`LiveRegionProvider`].
//! Handles ([`Announcer`]) are cheap to clone and degrade to a no-op when
//! no provider is bound.

mod clock;
mod notice;
mod provider;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use notice::Notice;
pub use provider::{Announcer, LiveRegionProvider, RegionSnapshot};

use std::time::Duration;

/// Delay after the last announcement before the regions are emptied.
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(1000);

/// Which live region an announcement targets.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    /// Value of the `aria-live` attribute for this region.
    pub const fn aria_live(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }

    /// ARIA role of the region.
    pub const fn role(self) -> &'static str {
        match self {
            Self::Polite => "status",
            Self::Assertive => "alert",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Polite => 0,
            Self::Assertive => 1,
        }
    }
}

/// How pending clears are scheduled across the two regions.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// One timer for both regions; when it fires both are emptied.
    #[default]
    Coupled,
    /// Each region has its own timer and only empties itself.
    PerChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncerConfig {
    pub clear_delay: Duration,
    pub policy: ClearPolicy,
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            clear_delay: DEFAULT_CLEAR_DELAY,
            policy: ClearPolicy::Coupled,
        }
    }
}

impl AnnouncerConfig {
    fn clear_delay_ms(&self) -> u64 {
        u64::try_from(self.clear_delay.as_millis()).unwrap_or(u64::MAX)
    }
}

/// A single message for one of the live regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

impl Announcement {
    pub fn new(text: impl Into<String>, politeness: Politeness) -> Self {
        Self {
            text: text.into(),
            politeness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClearTimer {
    Idle,
    Shared { deadline: u64 },
    PerChannel { deadlines: [Option<u64>; 2] },
}

/// The two live-region slots and their pending clear.
///
/// Time is passed in as milliseconds since an arbitrary epoch, the same
/// clock the event loop uses for its other debouncers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRegions {
    slots: [String; 2],
    timer: ClearTimer,
    config: AnnouncerConfig,
    writes: u64,
}

impl Default for LiveRegions {
    fn default() -> Self {
        Self::new(AnnouncerConfig::default())
    }
}

impl LiveRegions {
    pub const fn new(config: AnnouncerConfig) -> Self {
        Self {
            slots: [String::new(), String::new()],
            timer: ClearTimer::Idle,
            config,
            writes: 0,
        }
    }

    pub const fn config(&self) -> AnnouncerConfig {
        self.config
    }

    /// Current text of the region for `politeness` (empty when cleared).
    pub fn text(&self, politeness: Politeness) -> &str {
        &self.slots[politeness.index()]
    }

    pub fn polite(&self) -> &str {
        self.text(Politeness::Polite)
    }

    pub fn assertive(&self) -> &str {
        self.text(Politeness::Assertive)
    }

    /// Number of slot writes so far. Repeating a message still counts.
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    /// Write `announcement` into its slot and restart the clear timer.
    ///
    /// The other slot keeps its text. Under [`ClearPolicy::Coupled`] any
    /// pending clear is replaced, so only the newest deadline survives.
    pub fn announce(&mut self, announcement: Announcement, now_ms: u64) {
        let idx = announcement.politeness.index();
        let deadline = now_ms.saturating_add(self.config.clear_delay_ms());

        self.slots[idx] = announcement.text;
        self.writes += 1;

        self.timer = match (self.config.policy, self.timer) {
            (ClearPolicy::Coupled, _) => ClearTimer::Shared { deadline },
            (ClearPolicy::PerChannel, ClearTimer::PerChannel { mut deadlines }) => {
                deadlines[idx] = Some(deadline);
                ClearTimer::PerChannel { deadlines }
            }
            (ClearPolicy::PerChannel, _) => {
                let mut deadlines = [None; 2];
                deadlines[idx] = Some(deadline);
                ClearTimer::PerChannel { deadlines }
            }
        };
    }

    /// Fire any clear whose deadline has passed.
    ///
    /// Returns true when a clear fired.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.timer {
            ClearTimer::Idle => false,
            ClearTimer::Shared { deadline } => {
                if now_ms < deadline {
                    return false;
                }
                for slot in &mut self.slots {
                    slot.clear();
                }
                self.timer = ClearTimer::Idle;
                true
            }
            ClearTimer::PerChannel { mut deadlines } => {
                let mut fired = false;
                for (slot, deadline) in self.slots.iter_mut().zip(deadlines.iter_mut()) {
                    if deadline.is_some_and(|at| now_ms >= at) {
                        *deadline = None;
                        slot.clear();
                        fired = true;
                    }
                }
                self.timer = if deadlines.iter().all(Option::is_none) {
                    ClearTimer::Idle
                } else {
                    ClearTimer::PerChannel { deadlines }
                };
                fired
            }
        }
    }

    /// Earliest pending clear deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        match self.timer {
            ClearTimer::Idle => None,
            ClearTimer::Shared { deadline } => Some(deadline),
            ClearTimer::PerChannel { deadlines } => deadlines.iter().flatten().min().copied(),
        }
    }

    /// Number of clear timers currently armed.
    pub fn pending_timers(&self) -> usize {
        match self.timer {
            ClearTimer::Idle => 0,
            ClearTimer::Shared { .. } => 1,
            ClearTimer::PerChannel { deadlines } => deadlines.iter().flatten().count(),
        }
    }
}
