// SPDX-License-Identifier: MPL-2.0
//! Message and effect types for the timeline orchestrator.

use crate::domain::{ItemList, TimelineMode};
use crate::navigation::{NavCommand, NavigationKey};
use crate::scheduler::Fired;
use crate::scroll::{ContainerMetrics, ScrollIntent};

/// Inputs to [`Timeline::update`](super::Timeline::update).
#[derive(Debug, Clone)]
pub enum Message {
    /// Request an index; clamped into the list.
    GoTo(i64),
    Next,
    Previous,
    First,
    Last,
    /// Request the item with this public id; unknown ids are ignored.
    JumpToId(String),
    /// A navigation key was pressed while the timeline had focus.
    Key(NavigationKey),
    /// The caller supplied a new item list.
    SetItems(ItemList),
    SetMode(TimelineMode),
    StartSlideshow,
    PauseSlideshow,
    ResumeSlideshow,
    StopSlideshow,
    /// Jump back to the first item and start the slideshow from there.
    RestartSlideshow,
    /// The container scrolled (user or programmatic).
    ContainerScrolled(ContainerMetrics),
    /// A timer registered with the scheduler came due.
    TimerFired(Fired),
}

impl From<NavCommand> for Message {
    fn from(command: NavCommand) -> Self {
        match command {
            NavCommand::First => Message::First,
            NavCommand::Last => Message::Last,
            NavCommand::Next => Message::Next,
            NavCommand::Previous => Message::Previous,
        }
    }
}

/// Notifications for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEvent {
    /// The committed active item changed (`onActiveItemChange`).
    ActiveItemChanged { id: String, index: usize },
    /// Navigation to the first item was requested (`onFirst`).
    First,
    /// Navigation to the last item was requested (`onLast`).
    Last,
    /// Navigation to the next item was requested (`onNext`).
    Next,
    /// Navigation to the previous item was requested (`onPrevious`).
    Previous,
    /// The container reached the end of its scroll extent (`onScrollEnd`).
    ScrollEnd,
    SlideshowStarted,
    SlideshowPaused,
    SlideshowResumed,
    SlideshowStopped,
}

/// Outputs of [`Timeline::update`](super::Timeline::update), in the order they
/// must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(TimelineEvent),
    /// Set `scrollLeft`/`scrollTop` of the container.
    ScrollTo(ScrollIntent),
}

impl Effect {
    /// Returns the event if this is a notification.
    #[must_use]
    pub fn as_event(&self) -> Option<&TimelineEvent> {
        match self {
            Effect::Notify(event) => Some(event),
            Effect::ScrollTo(_) => None,
        }
    }

    /// Returns the intent if this is a scroll command.
    #[must_use]
    pub fn as_scroll(&self) -> Option<&ScrollIntent> {
        match self {
            Effect::ScrollTo(intent) => Some(intent),
            Effect::Notify(_) => None,
        }
    }
}
