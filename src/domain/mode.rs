// SPDX-License-Identifier: MPL-2.0
//! Timeline layout modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scroll axis of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left-to-right scrolling (`scrollLeft`).
    Horizontal,
    /// Top-to-bottom scrolling (`scrollTop`).
    Vertical,
}

/// Layout of the timeline.
///
/// Serialized with the external prop names (`VERTICAL`, `HORIZONTAL_ALL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimelineMode {
    /// Cards stacked on one side of a vertical line.
    Vertical,
    /// Cards alternating on both sides of a vertical line.
    #[default]
    VerticalAlternating,
    /// Markers on a horizontal line, only the active card shown.
    Horizontal,
    /// Markers on a horizontal line, every card shown.
    HorizontalAll,
    /// Vertical tree with cards branching on both sides.
    Tree,
}

impl TimelineMode {
    /// All modes, in declaration order.
    pub const ALL: [TimelineMode; 5] = [
        TimelineMode::Vertical,
        TimelineMode::VerticalAlternating,
        TimelineMode::Horizontal,
        TimelineMode::HorizontalAll,
        TimelineMode::Tree,
    ];

    /// Returns the axis along which the container scrolls.
    #[must_use]
    pub fn axis(self) -> Axis {
        if self.is_horizontal() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::HorizontalAll)
    }

    /// Returns true if off-screen cards are hidden in this layout.
    #[must_use]
    pub fn shows_only_active_card(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Returns the external prop name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "VERTICAL",
            Self::VerticalAlternating => "VERTICAL_ALTERNATING",
            Self::Horizontal => "HORIZONTAL",
            Self::HorizontalAll => "HORIZONTAL_ALL",
            Self::Tree => "TREE",
        }
    }
}

impl fmt::Display for TimelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown timeline mode: {}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for TimelineMode {
    type Err = UnknownMode;

    /// Accepts prop names case-insensitively, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
