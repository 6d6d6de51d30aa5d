// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Navigation**: Debounce window for index changes
//! - **Slideshow**: Per-item auto-advance duration
//! - **Layout**: Item width used as the horizontal look-ahead margin
//! - **Scroll**: Frame delay and measurement diagnostics

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Quiet period before a requested index becomes the active index (in milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Minimum debounce window (0 = commit on the next scheduler turn).
pub const MIN_DEBOUNCE_MS: u64 = 0;

/// Maximum debounce window.
pub const MAX_DEBOUNCE_MS: u64 = 2_000;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default time each item stays active while the slideshow runs (in milliseconds).
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 2_500;

/// Minimum slide duration. Zero advances on every tick.
pub const MIN_SLIDE_DURATION_MS: u64 = 0;

/// Maximum slide duration (10 minutes).
pub const MAX_SLIDE_DURATION_MS: u64 = 600_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default width of a horizontal timeline item (in pixels).
pub const DEFAULT_ITEM_WIDTH: f32 = 200.0;

/// Minimum item width.
pub const MIN_ITEM_WIDTH: f32 = 1.0;

/// Maximum item width.
pub const MAX_ITEM_WIDTH: f32 = 10_000.0;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Delay between an index commit and the geometry read (one 60 Hz frame).
pub const DEFAULT_FRAME_DELAY_MS: u64 = 16;

/// Consecutive geometry misses before a warning is logged.
pub const MEASUREMENT_WARN_THRESHOLD: u32 = 8;

/// Distance from the end of the scroll extent still counted as "at the end" (in pixels).
pub const SCROLL_END_THRESHOLD: f32 = 1.0;
