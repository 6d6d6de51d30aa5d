// SPDX-License-Identifier: MPL-2.0
//! Timeline newtypes.
//!
//! This module provides type-safe wrappers for timing and layout values,
//! ensuring they are always within valid ranges. Out-of-range input is
//! clamped, never rejected.

use crate::config::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_FRAME_DELAY_MS, DEFAULT_ITEM_WIDTH, DEFAULT_SLIDE_DURATION_MS,
    MAX_DEBOUNCE_MS, MAX_ITEM_WIDTH, MAX_SLIDE_DURATION_MS, MIN_DEBOUNCE_MS, MIN_ITEM_WIDTH,
    MIN_SLIDE_DURATION_MS,
};
use std::time::Duration;

// =============================================================================
// DebounceDelay
// =============================================================================

/// Quiet period applied to navigation requests, guaranteed to be within 0–2000 ms.
///
/// # Example
///
/// ```
/// use timeline_core::domain::DebounceDelay;
///
/// let delay = DebounceDelay::new(150);
/// assert_eq!(delay.millis(), 150);
///
/// // Values outside range are clamped
/// assert_eq!(DebounceDelay::new(60_000).millis(), 2_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceDelay(u64);

impl DebounceDelay {
    /// Creates a new debounce delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DebounceDelay {
    fn default() -> Self {
        Self(DEFAULT_DEBOUNCE_MS)
    }
}

// =============================================================================
// SlideDuration
// =============================================================================

/// Time each item stays active during a slideshow.
///
/// Zero is accepted: it is the degenerate configuration where every tick
/// advances immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDuration(u64);

impl SlideDuration {
    /// Creates a new slide duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDE_DURATION_MS, MAX_SLIDE_DURATION_MS))
    }

    /// Creates a slide duration from a signed value; negatives become zero.
    #[must_use]
    pub fn from_signed(millis: i64) -> Self {
        Self::new(u64::try_from(millis).unwrap_or(0))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when every tick should advance immediately.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_DURATION_MS)
    }
}

// =============================================================================
// ItemWidth
// =============================================================================

/// Width of a horizontal item in pixels, guaranteed to be within 1–10000 px.
///
/// Doubles as the look-ahead margin when deciding whether to scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemWidth(f32);

impl ItemWidth {
    /// Creates a new item width, clamping to the valid range.
    /// Non-finite input falls back to the default width.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(MIN_ITEM_WIDTH, MAX_ITEM_WIDTH))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ItemWidth {
    fn default() -> Self {
        Self(DEFAULT_ITEM_WIDTH)
    }
}

// =============================================================================
// FrameDelay
// =============================================================================

/// Delay between an index commit and the geometry read that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDelay(u64);

impl FrameDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_DEBOUNCE_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        Self(DEFAULT_FRAME_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn debounce_clamps_to_valid_range() {
        assert_eq!(DebounceDelay::new(0).millis(), MIN_DEBOUNCE_MS);
        assert_eq!(DebounceDelay::new(99_999).millis(), MAX_DEBOUNCE_MS);
        assert_eq!(DebounceDelay::default().millis(), 150);
    }

    #[test]
    fn debounce_converts_to_duration() {
        assert_eq!(
            DebounceDelay::new(150).as_duration(),
            Duration::from_millis(150)
        );
    }

    #[test]
    fn slide_duration_negative_becomes_immediate() {
        let duration = SlideDuration::from_signed(-500);
        assert!(duration.is_immediate());
        assert_eq!(duration.as_duration(), Duration::ZERO);
    }

    #[test]
    fn slide_duration_clamps_to_max() {
        assert_eq!(
            SlideDuration::new(u64::MAX).millis(),
            MAX_SLIDE_DURATION_MS
        );
        assert!(!SlideDuration::default().is_immediate());
    }

    #[test]
    fn item_width_clamps_and_rejects_nan() {
        assert_abs_diff_eq!(ItemWidth::new(0.0).value(), MIN_ITEM_WIDTH);
        assert_abs_diff_eq!(ItemWidth::new(1e9).value(), MAX_ITEM_WIDTH);
        assert_abs_diff_eq!(ItemWidth::new(f32::NAN).value(), DEFAULT_ITEM_WIDTH);
        assert_abs_diff_eq!(ItemWidth::new(320.0).value(), 320.0);
    }

    #[test]
    fn frame_delay_default_is_one_frame() {
        assert_eq!(
            FrameDelay::default().as_duration(),
            Duration::from_millis(DEFAULT_FRAME_DELAY_MS)
        );
    }
}
