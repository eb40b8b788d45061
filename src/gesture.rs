//! Pull-to-refresh for the notes list.
//!
//! A left-button drag that starts while the list is scrolled to the top
//! pulls the indicator down. Distances are in terminal rows and damped by
//! a resistance factor; releasing past the threshold requests a refresh.

/// Rows of (damped) pull needed before release triggers a refresh.
pub const DEFAULT_PULL_THRESHOLD: u16 = 4;

const RESISTANCE: f32 = 0.5;
const MAX_PULL_FACTOR: f32 = 1.5;
const REFRESHING_PULL_FACTOR: f32 = 0.6;

/// Something the caller should react to after feeding a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullEvent {
    /// The pull just became long enough to refresh on release.
    ThresholdCrossed,
    /// Released past the threshold; the caller should start a refresh and
    /// call [`PullToRefresh::finish_refresh`] when it completes.
    RefreshRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullToRefresh {
    threshold: f32,
    enabled: bool,
    start_row: Option<u16>,
    distance: f32,
    pulled_enough: bool,
    refreshing: bool,
}

impl Default for PullToRefresh {
    fn default() -> Self {
        Self::new(DEFAULT_PULL_THRESHOLD)
    }
}

impl PullToRefresh {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: f32::from(threshold.max(1)),
            enabled: true,
            start_row: None,
            distance: 0.0,
            pulled_enough: false,
            refreshing: false,
        }
    }

    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    pub const fn distance(&self) -> f32 {
        self.distance
    }

    pub const fn is_pulled_enough(&self) -> bool {
        self.pulled_enough
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub const fn is_pulling(&self) -> bool {
        self.start_row.is_some()
    }

    /// Pointer pressed at `row`. Only arms when the list is at the top.
    pub const fn start(&mut self, row: u16, at_top: bool) {
        if !self.enabled || self.refreshing || !at_top {
            return;
        }
        self.start_row = Some(row);
    }

    /// Pointer dragged to `row`.
    pub fn move_to(&mut self, row: u16) -> Option<PullEvent> {
        if !self.enabled || self.refreshing {
            return None;
        }
        let start = self.start_row?;
        let raw = f32::from(row.saturating_sub(start));
        self.distance = (raw * RESISTANCE).min(self.threshold * MAX_PULL_FACTOR);

        let was_enough = self.pulled_enough;
        self.pulled_enough = self.distance >= self.threshold;
        (self.pulled_enough && !was_enough).then_some(PullEvent::ThresholdCrossed)
    }

    /// Pointer released.
    pub fn end(&mut self) -> Option<PullEvent> {
        self.start_row.take()?;
        if self.pulled_enough && !self.refreshing {
            self.refreshing = true;
            self.pulled_enough = false;
            self.distance = self.threshold * REFRESHING_PULL_FACTOR;
            return Some(PullEvent::RefreshRequested);
        }
        self.reset();
        None
    }

    /// Enter the refreshing state without a gesture (keyboard refresh).
    ///
    /// Returns false when a refresh is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.start_row = None;
        self.pulled_enough = false;
        self.refreshing = true;
        self.distance = self.threshold * REFRESHING_PULL_FACTOR;
        true
    }

    pub const fn finish_refresh(&mut self) {
        self.reset();
    }

    const fn reset(&mut self) {
        self.start_row = None;
        self.distance = 0.0;
        self.pulled_enough = false;
        self.refreshing = false;
    }

    /// How the indicator should be drawn, or `None` when hidden.
    pub fn indicator(&self) -> Option<IndicatorGeometry> {
        if self.distance <= 0.0 && !self.refreshing {
            return None;
        }
        let progress = (self.distance / self.threshold).min(1.0);
        // Bounded by threshold * MAX_PULL_FACTOR, which fits a u16.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = self.distance.ceil().max(1.0) as u16;
        Some(IndicatorGeometry {
            height,
            progress,
            rotation_deg: progress * 180.0,
            opacity: (progress * 1.5).min(1.0),
            refreshing: self.refreshing,
            show_release_hint: self.pulled_enough && !self.refreshing,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    /// Rows taken above the list.
    pub height: u16,
    pub progress: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub refreshing: bool,
    pub show_release_hint: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_ignored_when_not_at_top() {
        let mut pull = PullToRefresh::new(4);
        pull.start(2, false);
        assert_eq!(pull.move_to(20), None);
        assert!(pull.indicator().is_none());
    }

    #[test]
    fn test_pull_applies_resistance() {
        let mut pull = PullToRefresh::new(4);
        pull.start(2, true);
        assert_eq!(pull.move_to(6), None);
        assert!((pull.distance() - 2.0).abs() < f32::EPSILON);
        assert!(!pull.is_pulled_enough());
    }

    #[test]
    fn test_pull_is_capped() {
        let mut pull = PullToRefresh::new(4);
        pull.start(0, true);
        pull.move_to(100);
        assert!((pull.distance() - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_crossed_reported_once() {
        let mut pull = PullToRefresh::new(4);
        pull.start(0, true);
        assert_eq!(pull.move_to(8), Some(PullEvent::ThresholdCrossed));
        assert_eq!(pull.move_to(10), None);
        pull.move_to(2);
        assert!(!pull.is_pulled_enough());
        assert_eq!(pull.move_to(9), Some(PullEvent::ThresholdCrossed));
    }

    #[test]
    fn test_upward_drag_counts_as_zero() {
        let mut pull = PullToRefresh::new(4);
        pull.start(10, true);
        pull.move_to(3);
        assert!(pull.distance().abs() < f32::EPSILON);
    }

    #[test]
    fn test_release_past_threshold_requests_refresh() {
        let mut pull = PullToRefresh::new(4);
        pull.start(0, true);
        pull.move_to(10);
        assert_eq!(pull.end(), Some(PullEvent::RefreshRequested));
        assert!(pull.is_refreshing());
        assert!((pull.distance() - 2.4).abs() < 1e-5);

        // Further gestures are ignored until the refresh finishes.
        pull.start(0, true);
        assert!(!pull.is_pulling());

        pull.finish_refresh();
        assert!(!pull.is_refreshing());
        assert!(pull.indicator().is_none());
    }

    #[test]
    fn test_release_short_of_threshold_resets() {
        let mut pull = PullToRefresh::new(4);
        pull.start(0, true);
        pull.move_to(4);
        assert_eq!(pull.end(), None);
        assert!(pull.distance().abs() < f32::EPSILON);
        assert!(!pull.is_refreshing());
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let mut pull = PullToRefresh::new(4);
        assert_eq!(pull.end(), None);
    }

    #[test]
    fn test_disabled_pull_does_nothing() {
        let mut pull = PullToRefresh::new(4).with_enabled(false);
        pull.start(0, true);
        assert_eq!(pull.move_to(20), None);
        assert_eq!(pull.end(), None);
    }

    #[test]
    fn test_begin_refresh_only_once() {
        let mut pull = PullToRefresh::default();
        assert!(pull.begin_refresh());
        assert!(!pull.begin_refresh());
    }

    #[test]
    fn test_indicator_geometry_mid_pull() {
        let mut pull = PullToRefresh::new(4);
        pull.start(0, true);
        pull.move_to(4);
        let geometry = pull.indicator().unwrap();
        assert_eq!(geometry.height, 2);
        assert!((geometry.progress - 0.5).abs() < f32::EPSILON);
        assert!((geometry.rotation_deg - 90.0).abs() < f32::EPSILON);
        assert!((geometry.opacity - 0.75).abs() < f32::EPSILON);
        assert!(!geometry.show_release_hint);
    }

    #[test]
    fn test_indicator_shows_release_hint_when_ready() {
        let mut pull = PullToRefresh::new(4);
        pull.start(0, true);
        pull.move_to(12);
        let geometry = pull.indicator().unwrap();
        assert!(geometry.show_release_hint);
        assert!((geometry.progress - 1.0).abs() < f32::EPSILON);
        assert!((geometry.opacity - 1.0).abs() < f32::EPSILON);
        assert_eq!(geometry.height, 6);
    }

    #[test]
    fn test_indicator_while_refreshing_hides_hint() {
        let mut pull = PullToRefresh::new(4);
        pull.begin_refresh();
        let geometry = pull.indicator().unwrap();
        assert!(geometry.refreshing);
        assert!(!geometry.show_release_hint);
        assert_eq!(geometry.height, 3);
    }
}
