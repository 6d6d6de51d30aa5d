// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Scroll offsets, item widths and slideshow progress are `f32`; compare them
//! with the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
