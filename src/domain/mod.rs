// SPDX-License-Identifier: MPL-2.0
//! Domain layer - timeline value types with no runtime dependencies.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde` derives (so item lists and modes can be read from files) it has
//! no dependencies outside `std`.
//!
//! # Modules
//!
//! - [`item`]: Caller items and identity ([`TimelineItem`], [`ItemKey`], [`ItemList`])
//! - [`mode`]: Layout modes ([`TimelineMode`], [`Axis`])
//! - [`newtypes`]: Bounded values ([`DebounceDelay`], [`SlideDuration`], [`ItemWidth`],
//!   [`FrameDelay`])

pub mod item;
pub mod mode;
pub mod newtypes;

pub use item::{CardPosition, ItemKey, ItemList, TimelineItem, POSITIONAL_ID_PREFIX};
pub use mode::{Axis, TimelineMode, UnknownMode};
pub use newtypes::{DebounceDelay, FrameDelay, ItemWidth, SlideDuration};
