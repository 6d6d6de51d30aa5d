// SPDX-License-Identifier: MPL-2.0
//! Scroll synchronization.
//!
//! Decides whether the container must scroll so the active item is visible,
//! and where to. Horizontal layouts keep one item width of leading context
//! visible; vertical layouts measure the content card, which can be taller
//! than the viewport, rather than the marker.

use super::measurer::{ContainerMetrics, ElementBox, ElementPart, ViewportMeasurer};
use crate::config::MEASUREMENT_WARN_THRESHOLD;
use crate::domain::{Axis, ItemWidth, TimelineMode};

/// Offsets closer than this are treated as the same position.
const SCROLL_EPSILON: f32 = 0.5;

/// Why a scroll was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollReason {
    /// The item was not fully inside the viewport.
    OutOfView,
    /// The item was visible but within one item width of an edge.
    LookAhead,
}

/// A single scroll command for the container. Consumed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollIntent {
    pub axis: Axis,
    /// New `scrollLeft` (horizontal) or `scrollTop` (vertical).
    pub target_offset: f32,
    pub reason: ScrollReason,
}

/// Horizontal decision for a marker at `element` inside `container`.
///
/// Returns `None` when the item is fully visible and clear of the
/// look-ahead margin, or when the computed target equals the current
/// position.
#[must_use]
pub fn horizontal_intent(
    container: &ContainerMetrics,
    element: &ElementBox,
    item_width: ItemWidth,
) -> Option<ScrollIntent> {
    let axis = Axis::Horizontal;
    let scroll = container.scroll_offset(axis);
    let container_right = scroll + container.client_size(axis);
    let (offset, width) = element.span(axis);
    let item_right = offset + width;
    let margin = item_width.value();

    let fully_visible = offset >= scroll && item_right <= container_right;
    let near_edge = offset < scroll + margin || item_right > container_right - margin;
    if fully_visible && !near_edge {
        return None;
    }

    let reason = if fully_visible {
        ScrollReason::LookAhead
    } else {
        ScrollReason::OutOfView
    };
    intent_to(container, axis, offset - margin, reason)
}

/// Vertical decision for a content card at `element` inside `container`.
#[must_use]
pub fn vertical_intent(container: &ContainerMetrics, element: &ElementBox) -> Option<ScrollIntent> {
    let axis = Axis::Vertical;
    let scroll = container.scroll_offset(axis);
    let container_bottom = scroll + container.client_size(axis);
    let (offset, height) = element.span(axis);

    if offset >= scroll && offset + height <= container_bottom {
        return None;
    }
    intent_to(container, axis, offset - height, ScrollReason::OutOfView)
}

fn intent_to(
    container: &ContainerMetrics,
    axis: Axis,
    target: f32,
    reason: ScrollReason,
) -> Option<ScrollIntent> {
    let mut target = target.max(0.0);
    if let Some(max) = container.max_scroll(axis) {
        target = target.min(max);
    }
    if (target - container.scroll_offset(axis)).abs() < SCROLL_EPSILON {
        return None;
    }
    Some(ScrollIntent {
        axis,
        target_offset: target,
        reason,
    })
}

/// Turns measurer readings into scroll intents for the active item.
#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    item_width: ItemWidth,
    consecutive_misses: u32,
}

impl ScrollSynchronizer {
    #[must_use]
    pub fn new(item_width: ItemWidth) -> Self {
        Self {
            item_width,
            consecutive_misses: 0,
        }
    }

    #[must_use]
    pub fn item_width(&self) -> ItemWidth {
        self.item_width
    }

    pub fn set_item_width(&mut self, item_width: ItemWidth) {
        self.item_width = item_width;
    }

    /// Number of sync attempts in a row that found no usable geometry.
    #[must_use]
    pub fn consecutive_misses(&self) -> u32 {
        self.consecutive_misses
    }

    /// Computes the scroll needed to show item `id` in `mode`.
    ///
    /// Missing or zero-sized geometry yields `None`; the next index change
    /// tries again.
    pub fn sync<M: ViewportMeasurer + ?Sized>(
        &mut self,
        mode: TimelineMode,
        id: &str,
        measurer: &M,
    ) -> Option<ScrollIntent> {
        let Some((container, element)) = Self::measure(mode, id, measurer) else {
            self.record_miss(id);
            return None;
        };
        if self.consecutive_misses >= MEASUREMENT_WARN_THRESHOLD {
            tracing::debug!(
                misses = self.consecutive_misses,
                "timeline geometry available again"
            );
        }
        self.consecutive_misses = 0;

        match mode.axis() {
            Axis::Horizontal => horizontal_intent(&container, &element, self.item_width),
            Axis::Vertical => vertical_intent(&container, &element),
        }
    }

    fn measure<M: ViewportMeasurer + ?Sized>(
        mode: TimelineMode,
        id: &str,
        measurer: &M,
    ) -> Option<(ContainerMetrics, ElementBox)> {
        let axis = mode.axis();
        let container = measurer.container()?;
        if container.client_size(axis) <= 0.0 {
            return None;
        }
        let element = match axis {
            Axis::Horizontal => measurer.element(id, ElementPart::Marker),
            Axis::Vertical => measurer
                .element(id, ElementPart::Content)
                .or_else(|| measurer.element(id, ElementPart::Marker)),
        }?;
        let (_, size) = element.span(axis);
        (size > 0.0).then_some((container, element))
    }

    fn record_miss(&mut self, id: &str) {
        self.consecutive_misses = self.consecutive_misses.saturating_add(1);
        if self.consecutive_misses == MEASUREMENT_WARN_THRESHOLD {
            tracing::warn!(
                item = id,
                misses = self.consecutive_misses,
                "timeline container or item geometry unavailable; is the container mounted?"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::LayoutSnapshot;
    use crate::test_utils::assert_abs_diff_eq;

    fn horizontal_container(scroll_left: f32) -> ContainerMetrics {
        ContainerMetrics {
            scroll_left,
            client_width: 1_000.0,
            scroll_width: 5_000.0,
            ..ContainerMetrics::default()
        }
    }

    fn vertical_container(scroll_top: f32) -> ContainerMetrics {
        ContainerMetrics {
            scroll_top,
            client_height: 600.0,
            scroll_height: 4_000.0,
            ..ContainerMetrics::default()
        }
    }

    fn marker(left: f32) -> ElementBox {
        ElementBox::new(left, 0.0, 200.0, 40.0)
    }

    fn intent_at(scroll_left: f32, marker_left: f32) -> Option<ScrollIntent> {
        horizontal_intent(
            &horizontal_container(scroll_left),
            &marker(marker_left),
            ItemWidth::new(200.0),
        )
    }

    #[test]
    fn fully_visible_item_outside_margin_needs_no_scroll() {
        let intent = intent_at(0.0, 400.0);
        assert_eq!(intent, None);
    }

    #[test]
    fn item_past_right_edge_scrolls_with_leading_context() {
        let intent = intent_at(0.0, 1_100.0).expect("should scroll");
        assert_eq!(intent.axis, Axis::Horizontal);
        assert_eq!(intent.reason, ScrollReason::OutOfView);
        assert_abs_diff_eq!(intent.target_offset, 900.0);
    }

    #[test]
    fn item_before_left_edge_scrolls_back() {
        let intent = intent_at(2_000.0, 1_000.0).expect("should scroll");
        assert_abs_diff_eq!(intent.target_offset, 800.0);
    }

    #[test]
    fn visible_item_in_look_ahead_margin_scrolls() {
        // Fully visible (700..900 inside 0..1000) but closer than 200 px to the right edge.
        let intent = intent_at(0.0, 700.0).expect("should scroll");
        assert_eq!(intent.reason, ScrollReason::LookAhead);
        assert_abs_diff_eq!(intent.target_offset, 500.0);
    }

    #[test]
    fn target_is_clamped_to_zero() {
        // First item sits at the left edge of an already scrolled container.
        let intent = intent_at(50.0, 100.0).expect("should scroll");
        assert_abs_diff_eq!(intent.target_offset, 0.0);
    }

    #[test]
    fn target_equal_to_current_position_is_suppressed() {
        // Item at the left margin of a container already showing it with one item of context.
        let intent = intent_at(0.0, 0.0);
        assert_eq!(intent, None);
    }

    #[test]
    fn target_is_clamped_to_scroll_extent() {
        let container = ContainerMetrics {
            scroll_left: 0.0,
            client_width: 1_000.0,
            scroll_width: 1_500.0,
            ..ContainerMetrics::default()
        };
        let intent = horizontal_intent(&container, &marker(1_300.0), ItemWidth::new(200.0))
            .expect("should scroll");
        assert_abs_diff_eq!(intent.target_offset, 500.0);
    }

    #[test]
    fn vertical_visible_content_needs_no_scroll() {
        let content = ElementBox::new(0.0, 100.0, 300.0, 200.0);
        assert_eq!(vertical_intent(&vertical_container(0.0), &content), None);
    }

    #[test]
    fn vertical_hidden_content_scrolls_to_offset_minus_height() {
        let content = ElementBox::new(0.0, 1_500.0, 300.0, 250.0);
        let intent = vertical_intent(&vertical_container(0.0), &content).expect("should scroll");
        assert_eq!(intent.axis, Axis::Vertical);
        assert_abs_diff_eq!(intent.target_offset, 1_250.0);
    }

    #[test]
    fn vertical_content_taller_than_viewport_settles() {
        let content = ElementBox::new(0.0, 1_000.0, 300.0, 900.0);
        let intent = vertical_intent(&vertical_container(0.0), &content).expect("should scroll");
        assert_abs_diff_eq!(intent.target_offset, 100.0);
        // Once there, asking again does not jitter.
        assert_eq!(vertical_intent(&vertical_container(100.0), &content), None);
    }

    #[test]
    fn synchronizer_uses_content_box_in_vertical_modes() {
        let mut layout = LayoutSnapshot::new();
        layout.set_container(vertical_container(0.0));
        layout.set_element("a", ElementPart::Marker, ElementBox::new(0.0, 50.0, 20.0, 20.0));
        layout.set_element("a", ElementPart::Content, ElementBox::new(0.0, 2_000.0, 300.0, 400.0));

        let mut sync = ScrollSynchronizer::new(ItemWidth::default());
        let intent = sync.sync(TimelineMode::Tree, "a", &layout).expect("should scroll");
        assert_abs_diff_eq!(intent.target_offset, 1_600.0);
    }

    #[test]
    fn synchronizer_falls_back_to_marker_without_content() {
        let mut layout = LayoutSnapshot::new();
        layout.set_container(vertical_container(0.0));
        layout.set_element("a", ElementPart::Marker, ElementBox::new(0.0, 900.0, 20.0, 20.0));

        let mut sync = ScrollSynchronizer::new(ItemWidth::default());
        assert!(sync.sync(TimelineMode::Vertical, "a", &layout).is_some());
    }

    #[test]
    fn missing_geometry_is_a_silent_noop() {
        let mut sync = ScrollSynchronizer::new(ItemWidth::default());
        let layout = LayoutSnapshot::new();
        assert_eq!(sync.sync(TimelineMode::Horizontal, "a", &layout), None);
        assert_eq!(sync.consecutive_misses(), 1);
    }

    #[test]
    fn zero_sized_container_counts_as_missing() {
        let mut layout = LayoutSnapshot::new();
        layout.set_container(ContainerMetrics::default());
        layout.set_element("a", ElementPart::Marker, marker(5_000.0));

        let mut sync = ScrollSynchronizer::new(ItemWidth::default());
        assert_eq!(sync.sync(TimelineMode::Horizontal, "a", &layout), None);
        assert_eq!(sync.consecutive_misses(), 1);
    }

    #[test]
    fn successful_measurement_resets_miss_counter() {
        let mut layout = LayoutSnapshot::new();
        let mut sync = ScrollSynchronizer::new(ItemWidth::default());
        for _ in 0..(MEASUREMENT_WARN_THRESHOLD + 2) {
            sync.sync(TimelineMode::Horizontal, "a", &layout);
        }
        assert_eq!(sync.consecutive_misses(), MEASUREMENT_WARN_THRESHOLD + 2);

        layout.set_container(horizontal_container(0.0));
        layout.set_element("a", ElementPart::Marker, marker(400.0));
        assert_eq!(sync.sync(TimelineMode::Horizontal, "a", &layout), None);
        assert_eq!(sync.consecutive_misses(), 0);
    }
}
