// SPDX-License-Identifier: MPL-2.0
//! Active item controller.
//!
//! Single source of truth for which item is active. Navigation requests set
//! a pending index; the observable index only changes once the debounce
//! window passes without another request, so a burst of key presses or
//! wheel events becomes a single transition.
//!
//! Requests are clamped into the list, never rejected, so the active index
//! is always a valid position in the current list (or `None` when the list
//! is empty).

pub mod keyboard;

pub use keyboard::{NavCommand, NavigationKey};

use crate::domain::DebounceDelay;
use crate::scheduler::{Scheduler, Timer, TimerHandle};

/// Committed and requested index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveIndexState {
    /// Committed index; `None` only when the list is empty.
    pub index: Option<usize>,
    /// Most recently requested index, before debounce.
    pub pending: Option<usize>,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Empty list, boundary reached, or the target is already requested.
    Ignored,
    /// The target was accepted and will commit after the debounce window.
    Scheduled { target: usize },
}

impl Request {
    #[must_use]
    pub fn is_scheduled(self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub previous: Option<usize>,
    pub index: usize,
}

/// Owns the active index and its debounce timer.
#[derive(Debug)]
pub struct ActiveItemController {
    state: ActiveIndexState,
    len: usize,
    debounce: DebounceDelay,
    settle_timer: Option<TimerHandle>,
}

impl ActiveItemController {
    /// Creates a controller for a list of `len` items.
    ///
    /// The initial index is clamped into the list; an empty list has no
    /// active index.
    #[must_use]
    pub fn new(len: usize, initial: usize, debounce: DebounceDelay) -> Self {
        Self {
            state: ActiveIndexState {
                index: clamp_index(len, initial as i64),
                pending: None,
            },
            len,
            debounce,
            settle_timer: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.state.index
    }

    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.state.pending
    }

    #[must_use]
    pub fn state(&self) -> ActiveIndexState {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index that navigation steps from: the pending request if one is in
    /// flight, otherwise the committed index.
    #[must_use]
    pub fn effective_index(&self) -> Option<usize> {
        self.state.pending.or(self.state.index)
    }

    /// True when `previous()` would be a no-op.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.effective_index().is_none_or(|i| i == 0)
    }

    /// True when `next()` would be a no-op.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.effective_index().is_none_or(|i| i + 1 >= self.len)
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle_timer.is_some()
    }

    pub fn set_debounce(&mut self, debounce: DebounceDelay) {
        self.debounce = debounce;
    }

    /// Requests `index`, clamped into the list.
    pub fn go_to<S: Scheduler + ?Sized>(&mut self, index: i64, scheduler: &mut S) -> Request {
        let Some(target) = clamp_index(self.len, index) else {
            return Request::Ignored;
        };
        if self.effective_index() == Some(target) {
            return Request::Ignored;
        }

        self.state.pending = Some(target);
        if let Some(handle) = self.settle_timer.take() {
            scheduler.cancel(handle);
        }
        self.settle_timer = Some(scheduler.schedule(self.debounce.as_duration(), Timer::Settle));
        Request::Scheduled { target }
    }

    pub fn next<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Request {
        match self.effective_index() {
            Some(i) if i + 1 < self.len => self.go_to(i as i64 + 1, scheduler),
            _ => Request::Ignored,
        }
    }

    pub fn previous<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Request {
        match self.effective_index() {
            Some(i) if i > 0 => self.go_to(i as i64 - 1, scheduler),
            _ => Request::Ignored,
        }
    }

    pub fn first<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Request {
        self.go_to(0, scheduler)
    }

    pub fn last<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Request {
        self.go_to(self.len as i64 - 1, scheduler)
    }

    /// Applies a keyboard or toolbar command.
    pub fn apply<S: Scheduler + ?Sized>(
        &mut self,
        command: NavCommand,
        scheduler: &mut S,
    ) -> Request {
        match command {
            NavCommand::First => self.first(scheduler),
            NavCommand::Last => self.last(scheduler),
            NavCommand::Next => self.next(scheduler),
            NavCommand::Previous => self.previous(scheduler),
        }
    }

    /// Commits the pending index if `handle` is the live debounce timer.
    ///
    /// Returns the change, or `None` if the timer was stale or the pending
    /// index equals the committed one.
    pub fn settle(&mut self, handle: TimerHandle) -> Option<Settled> {
        if self.settle_timer != Some(handle) {
            return None;
        }
        self.settle_timer = None;
        let target = self.state.pending.take()?;
        self.commit(target)
    }

    /// Commits `index` immediately, dropping any pending request.
    ///
    /// Used by the slideshow and by reconciliation, which do not go through
    /// the debounce window.
    pub fn commit_now<S: Scheduler + ?Sized>(
        &mut self,
        index: usize,
        scheduler: &mut S,
    ) -> Option<Settled> {
        self.cancel(scheduler);
        self.commit(index)
    }

    /// Replaces the list length and committed index after reconciliation.
    ///
    /// A pending request survives only if `keep_pending` is set and it still
    /// fits the new list.
    pub fn reset_list<S: Scheduler + ?Sized>(
        &mut self,
        len: usize,
        index: Option<usize>,
        keep_pending: bool,
        scheduler: &mut S,
    ) {
        self.len = len;
        self.state.index = index.filter(|i| *i < len);
        let pending_fits = self.state.pending.is_some_and(|p| p < len);
        if !(keep_pending && pending_fits) {
            self.cancel(scheduler);
        }
    }

    /// Cancels the debounce timer and forgets the pending request.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.settle_timer.take() {
            scheduler.cancel(handle);
        }
        self.state.pending = None;
    }

    fn commit(&mut self, index: usize) -> Option<Settled> {
        let index = clamp_index(self.len, index as i64)?;
        let previous = self.state.index;
        if previous == Some(index) {
            return None;
        }
        self.state.index = Some(index);
        Some(Settled { previous, index })
    }
}

/// Clamps a possibly negative index into `[0, len - 1]`.
fn clamp_index(len: usize, index: i64) -> Option<usize> {
    let last = len.checked_sub(1)?;
    Some(index.clamp(0, last as i64) as usize)
}
