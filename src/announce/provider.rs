use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::{Announcement, AnnouncerConfig, Clock, LiveRegions, MonotonicClock, Politeness};

/// Owns the live regions for one application session.
///
/// Create one at startup, hand [`Announcer`]s to whatever needs to speak,
/// and call [`poll`](Self::poll) from the event loop so pending clears fire.
pub struct LiveRegionProvider {
    regions: Rc<RefCell<LiveRegions>>,
    clock: Rc<dyn Clock>,
}

impl fmt::Debug for LiveRegionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveRegionProvider")
            .field("regions", &self.regions.borrow())
            .finish_non_exhaustive()
    }
}

impl LiveRegionProvider {
    pub fn new(config: AnnouncerConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }

    pub fn with_clock(config: AnnouncerConfig, clock: impl Clock + 'static) -> Self {
        Self {
            regions: Rc::new(RefCell::new(LiveRegions::new(config))),
            clock: Rc::new(clock),
        }
    }

    /// A handle bound to this provider.
    pub fn announcer(&self) -> Announcer {
        Announcer {
            target: Some(Target {
                regions: Rc::downgrade(&self.regions),
                clock: Rc::clone(&self.clock),
            }),
        }
    }

    pub fn config(&self) -> AnnouncerConfig {
        self.regions.borrow().config()
    }

    /// Fire a due clear. Returns true when the regions changed.
    pub fn poll(&self) -> bool {
        let now_ms = self.clock.now_ms();
        let fired = self.regions.borrow_mut().poll(now_ms);
        if fired {
            tracing::debug!(now_ms, "live regions cleared");
        }
        fired
    }

    /// Time left before the next pending clear, if any.
    pub fn time_until_clear(&self) -> Option<Duration> {
        let deadline = self.regions.borrow().next_deadline()?;
        Some(Duration::from_millis(
            deadline.saturating_sub(self.clock.now_ms()),
        ))
    }

    pub fn snapshot(&self) -> RegionSnapshot {
        let regions = self.regions.borrow();
        RegionSnapshot {
            polite: regions.polite().to_string(),
            assertive: regions.assertive().to_string(),
            writes: regions.writes(),
        }
    }
}

/// Copy of the region texts taken for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSnapshot {
    pub polite: String,
    pub assertive: String,
    pub writes: u64,
}

impl RegionSnapshot {
    pub fn text(&self, politeness: Politeness) -> &str {
        match politeness {
            Politeness::Polite => &self.polite,
            Politeness::Assertive => &self.assertive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polite.is_empty() && self.assertive.is_empty()
    }
}

#[derive(Clone)]
struct Target {
    regions: Weak<RefCell<LiveRegions>>,
    clock: Rc<dyn Clock>,
}

/// Handle used by UI code to announce.
///
/// The default handle is not bound to any provider and every call on it
/// is silently dropped, so callers never need to check first.
#[derive(Clone, Default)]
pub struct Announcer {
    target: Option<Target>,
}

impl fmt::Debug for Announcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcer")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Announcer {
    /// A handle that ignores every announcement.
    pub const fn detached() -> Self {
        Self { target: None }
    }

    /// Whether announcements reach a live provider.
    pub fn is_attached(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.regions.strong_count() > 0)
    }

    /// Write `message` into a live region. `None` means polite.
    pub fn announce(
        &self,
        message: impl Into<String>,
        politeness: impl Into<Option<Politeness>>,
    ) {
        let Some(target) = &self.target else {
            return;
        };
        // Provider dropped: same as never bound.
        let Some(regions) = target.regions.upgrade() else {
            return;
        };
        let politeness = politeness.into().unwrap_or_default();
        let announcement = Announcement::new(message, politeness);
        tracing::debug!(
            politeness = politeness.aria_live(),
            text = %announcement.text,
            "announce"
        );
        let now_ms = target.clock.now_ms();
        regions.borrow_mut().announce(announcement, now_ms);
    }
}
