//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use hark::announce::{
    Announcer, AnnouncerConfig, ClearPolicy, LiveRegionProvider, ManualClock, RegionSnapshot,
};

/// A provider driven by a hand-advanced clock.
pub struct Harness {
    pub provider: LiveRegionProvider,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(AnnouncerConfig::default())
    }

    pub fn per_channel() -> Self {
        Self::with_config(AnnouncerConfig {
            policy: ClearPolicy::PerChannel,
            ..AnnouncerConfig::default()
        })
    }

    pub fn with_config(config: AnnouncerConfig) -> Self {
        let clock = ManualClock::new();
        let provider = LiveRegionProvider::with_clock(config, clock.clone());
        Self { provider, clock }
    }

    pub fn announcer(&self) -> Announcer {
        self.provider.announcer()
    }

    /// Move time forward and fire whatever clear is due.
    pub fn advance_ms(&self, ms: u64) -> RegionSnapshot {
        self.clock.advance(Duration::from_millis(ms));
        self.provider.poll();
        self.provider.snapshot()
    }

    pub fn snapshot(&self) -> RegionSnapshot {
        self.provider.snapshot()
    }
}
