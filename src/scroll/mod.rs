// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry and scroll decisions.
//!
//! - [`measurer`]: the geometry boundary ([`ViewportMeasurer`]) and a recorded layout
//! - [`sync`]: deciding whether and where to scroll for the active item
//! - [`scroll_end`]: edge detection for the scroll-end notification

pub mod measurer;
pub mod scroll_end;
pub mod sync;

pub use measurer::{ContainerMetrics, ElementBox, ElementPart, LayoutSnapshot, ViewportMeasurer};
pub use scroll_end::ScrollEndTracker;
pub use sync::{horizontal_intent, vertical_intent, ScrollIntent, ScrollReason, ScrollSynchronizer};
