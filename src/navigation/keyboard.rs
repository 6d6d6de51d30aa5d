// SPDX-License-Identifier: MPL-2.0
//! Keyboard to navigation command mapping.
//!
//! Key events themselves are delivered by the host; this module only decides
//! which navigation call a key triggers in a given layout.

use crate::domain::{Axis, TimelineMode};

/// Keys that drive timeline navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// Navigation call triggered by a key or toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    First,
    Last,
    Next,
    Previous,
}

impl NavigationKey {
    /// Maps the key to a command for `mode`.
    ///
    /// Arrow keys only act along the layout's axis; Home and End work in
    /// every layout.
    #[must_use]
    pub fn command(self, mode: TimelineMode) -> Option<NavCommand> {
        match (self, mode.axis()) {
            (Self::Home, _) => Some(NavCommand::First),
            (Self::End, _) => Some(NavCommand::Last),
            (Self::ArrowRight, Axis::Horizontal) | (Self::ArrowDown, Axis::Vertical) => {
                Some(NavCommand::Next)
            }
            (Self::ArrowLeft, Axis::Horizontal) | (Self::ArrowUp, Axis::Vertical) => {
                Some(NavCommand::Previous)
            }
            _ => None,
        }
    }
}
