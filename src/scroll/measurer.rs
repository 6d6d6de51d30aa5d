// SPDX-License-Identifier: MPL-2.0
//! Geometry supplied by the rendering layer.
//!
//! The core never touches a UI toolkit. Whatever draws the timeline
//! implements [`ViewportMeasurer`] and answers geometry queries on demand.

use crate::domain::Axis;
use std::collections::HashMap;

/// Which part of an item is being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementPart {
    /// The point on the timeline line.
    Marker,
    /// The card with the item's content; can be taller than the viewport.
    Content,
}

/// Element box relative to the scroll container's content origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBox {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns `(offset, size)` along `axis`.
    #[must_use]
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.left, self.width),
            Axis::Vertical => (self.top, self.height),
        }
    }
}

/// Scroll container state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerMetrics {
    pub scroll_left: f32,
    pub scroll_top: f32,
    pub client_width: f32,
    pub client_height: f32,
    /// Total scrollable width; 0 when unknown.
    pub scroll_width: f32,
    /// Total scrollable height; 0 when unknown.
    pub scroll_height: f32,
}

impl ContainerMetrics {
    #[must_use]
    pub fn scroll_offset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.scroll_left,
            Axis::Vertical => self.scroll_top,
        }
    }

    #[must_use]
    pub fn client_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.client_width,
            Axis::Vertical => self.client_height,
        }
    }

    #[must_use]
    pub fn scroll_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.scroll_width,
            Axis::Vertical => self.scroll_height,
        }
    }

    /// Largest reachable scroll offset along `axis`, if the extent is known.
    #[must_use]
    pub fn max_scroll(&self, axis: Axis) -> Option<f32> {
        let extent = self.scroll_size(axis);
        (extent > 0.0).then(|| (extent - self.client_size(axis)).max(0.0))
    }

    /// Returns a copy scrolled to `offset` along `axis`.
    #[must_use]
    pub fn scrolled_to(mut self, axis: Axis, offset: f32) -> Self {
        match axis {
            Axis::Horizontal => self.scroll_left = offset,
            Axis::Vertical => self.scroll_top = offset,
        }
        self
    }
}

/// Geometry provider implemented by the rendering layer.
pub trait ViewportMeasurer {
    /// Current container metrics, or `None` if it is not mounted.
    fn container(&self) -> Option<ContainerMetrics>;

    /// Box of one part of the item with public id `id`, or `None` if it is
    /// not mounted.
    fn element(&self, id: &str, part: ElementPart) -> Option<ElementBox>;
}

/// Measurer answering from a recorded layout.
///
/// Hosts that lay out off the main loop can push a snapshot after each
/// layout pass; tests use it to describe a viewport directly.
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    container: Option<ContainerMetrics>,
    elements: HashMap<(String, ElementPart), ElementBox>,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_container(&mut self, metrics: ContainerMetrics) {
        self.container = Some(metrics);
    }

    /// Forgets the container, as if it had unmounted.
    pub fn clear_container(&mut self) {
        self.container = None;
    }

    pub fn set_element(&mut self, id: impl Into<String>, part: ElementPart, element: ElementBox) {
        self.elements.insert((id.into(), part), element);
    }

    pub fn remove_element(&mut self, id: &str, part: ElementPart) {
        self.elements.remove(&(id.to_string(), part));
    }

    /// Applies a scroll command to the recorded container.
    pub fn scroll_to(&mut self, axis: Axis, offset: f32) {
        if let Some(container) = self.container {
            self.container = Some(container.scrolled_to(axis, offset));
        }
    }
}

impl ViewportMeasurer for LayoutSnapshot {
    fn container(&self) -> Option<ContainerMetrics> {
        self.container
    }

    fn element(&self, id: &str, part: ElementPart) -> Option<ElementBox> {
        self.elements.get(&(id.to_string(), part)).copied()
    }
}
