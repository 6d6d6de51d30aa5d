// SPDX-License-Identifier: MPL-2.0
//! Scroll-end detection for the `onScrollEnd` notification.

use super::measurer::ContainerMetrics;
use crate::config::SCROLL_END_THRESHOLD;
use crate::domain::Axis;

/// Edge-triggered "reached the end" detector.
///
/// Reports once when the container reaches the end of its scroll extent and
/// re-arms when it scrolls away again.
#[derive(Debug, Clone, Default)]
pub struct ScrollEndTracker {
    at_end: bool,
}

impl ScrollEndTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a scroll position; returns true if the end was just reached.
    pub fn observe(&mut self, axis: Axis, metrics: &ContainerMetrics) -> bool {
        let now_at_end = is_at_end(axis, metrics);
        let reached = now_at_end && !self.at_end;
        self.at_end = now_at_end;
        reached
    }

    /// Forgets the current state, e.g. after the content was replaced.
    pub fn reset(&mut self) {
        self.at_end = false;
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }
}

/// Content that does not overflow cannot be scrolled to its end.
fn is_at_end(axis: Axis, metrics: &ContainerMetrics) -> bool {
    let extent = metrics.scroll_size(axis);
    let client = metrics.client_size(axis);
    if extent <= client || client <= 0.0 {
        return false;
    }
    metrics.scroll_offset(axis) + client >= extent - SCROLL_END_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(scroll_top: f32) -> ContainerMetrics {
        ContainerMetrics {
            scroll_top,
            client_height: 500.0,
            scroll_height: 2_000.0,
            ..ContainerMetrics::default()
        }
    }

    #[test]
    fn reports_reaching_end_once() {
        let mut tracker = ScrollEndTracker::new();
        assert!(!tracker.observe(Axis::Vertical, &vertical(1_000.0)));
        assert!(tracker.observe(Axis::Vertical, &vertical(1_500.0)));
        assert!(!tracker.observe(Axis::Vertical, &vertical(1_500.0)));
        assert!(tracker.is_at_end());
    }

    #[test]
    fn rearms_after_leaving_end() {
        let mut tracker = ScrollEndTracker::new();
        assert!(tracker.observe(Axis::Vertical, &vertical(1_500.0)));
        assert!(!tracker.observe(Axis::Vertical, &vertical(200.0)));
        assert!(tracker.observe(Axis::Vertical, &vertical(1_499.5)));
    }

    #[test]
    fn non_overflowing_content_never_reports() {
        let mut tracker = ScrollEndTracker::new();
        let metrics = ContainerMetrics {
            client_width: 800.0,
            scroll_width: 600.0,
            ..ContainerMetrics::default()
        };
        assert!(!tracker.observe(Axis::Horizontal, &metrics));
    }

    #[test]
    fn only_the_layout_axis_counts() {
        let mut tracker = ScrollEndTracker::new();
        assert!(!tracker.observe(Axis::Horizontal, &vertical(1_500.0)));
    }

    #[test]
    fn reset_rearms() {
        let mut tracker = ScrollEndTracker::new();
        tracker.observe(Axis::Vertical, &vertical(1_500.0));
        tracker.reset();
        assert!(tracker.observe(Axis::Vertical, &vertical(1_500.0)));
    }
}
