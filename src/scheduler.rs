// SPDX-License-Identifier: MPL-2.0
//! Injectable timer scheduling.
//!
//! Debounce, slideshow and scroll-frame waits are expressed as timers
//! registered with a [`Scheduler`]. Nothing in the core sleeps: the host
//! dispatches each due timer back into the timeline as a message.
//!
//! [`TimerQueue`] is the deadline-queue implementation. It runs on virtual
//! time, which makes it usable both from tests (advance the clock by hand)
//! and from the real-time [`driver`](crate::driver) (advance it to the
//! elapsed wall-clock time).

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// What a timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Debounce quiet period elapsed; commit the pending index.
    Settle,
    /// The active item's slideshow duration elapsed.
    SlideshowAdvance,
    /// Next frame after a commit; layout is up to date for measuring.
    ScrollFrame,
}

/// Cancellation handle returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub timer: Timer,
    /// Scheduler time at which the timer was due.
    pub at: Duration,
}

/// Source of delayed callbacks.
pub trait Scheduler {
    /// Current scheduler time, measured from an arbitrary origin.
    fn now(&self) -> Duration;

    /// Registers `timer` to fire once after `delay`.
    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerHandle;

    /// Cancels a timer. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Virtual-time deadline queue.
///
/// Timers fire in deadline order; timers with the same deadline fire in the
/// order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    entries: BTreeMap<(Duration, u64), Timer>,
    deadlines: HashMap<u64, Duration>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live (scheduled, not yet fired or cancelled) timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if a timer of the given kind is scheduled.
    #[must_use]
    pub fn has_pending(&self, timer: Timer) -> bool {
        self.entries.values().any(|t| *t == timer)
    }

    /// Returns the earliest deadline, if any timer is scheduled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns the earliest timer due at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired> {
        let (&(deadline, seq), _) = self.entries.iter().next()?;
        if deadline > until {
            return None;
        }
        let timer = self.entries.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        self.now = self.now.max(deadline);
        Some(Fired {
            handle: TimerHandle(seq),
            timer,
            at: deadline,
        })
    }

    /// Moves the clock forward to `now`. The clock never goes backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advances the clock by `by` and returns every timer that came due,
    /// in firing order.
    ///
    /// Timers scheduled by the caller while handling the returned list are
    /// not included; use [`pop_due`](Self::pop_due) in a loop when handlers
    /// schedule follow-up timers inside the same window.
    pub fn advance(&mut self, by: Duration) -> Vec<Fired> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(until) {
            fired.push(f);
        }
        self.set_now(until);
        fired
    }

    /// Cancels every scheduled timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = self.now.saturating_add(delay);
        self.entries.insert((deadline, seq), timer);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(deadline) = self.deadlines.remove(&handle.0) {
            self.entries.remove(&(deadline, handle.0));
        }
    }
}
