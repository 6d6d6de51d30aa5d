// SPDX-License-Identifier: MPL-2.0
//! Slideshow timer state machine.
//!
//! `Stopped → Running ⇄ Paused → Stopped`. While running, a single advance
//! timer is scheduled for the remaining time of the active item. Pausing
//! banks the elapsed time and cancels the timer, so resuming continues the
//! same item instead of restarting it.
//!
//! The slideshow does not move the active index itself; when its timer
//! fires the orchestrator advances the controller and tells the slideshow
//! whether to keep going.

use crate::domain::SlideDuration;
use crate::scheduler::{Scheduler, Timer, TimerHandle};
use std::time::Duration;

/// Represents the current slideshow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideshowState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl SlideshowState {
    /// Returns true while the slideshow is started, paused or not.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }
}

/// Auto-advance timer for the active item.
#[derive(Debug)]
pub struct Slideshow {
    state: SlideshowState,
    duration: SlideDuration,
    /// Elapsed time banked from earlier running segments of the current item.
    banked: Duration,
    /// Scheduler time at which the current running segment started.
    segment_start: Option<Duration>,
    timer: Option<TimerHandle>,
}

impl Slideshow {
    #[must_use]
    pub fn new(duration: SlideDuration) -> Self {
        Self {
            state: SlideshowState::Stopped,
            duration,
            banked: Duration::ZERO,
            segment_start: None,
            timer: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SlideshowState {
        self.state
    }

    #[must_use]
    pub fn duration(&self) -> SlideDuration {
        self.duration
    }

    /// Time the active item has been shown while running.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        let running = self
            .segment_start
            .map_or(Duration::ZERO, |start| now.saturating_sub(start));
        self.banked + running
    }

    /// Fraction of the active item's duration that has elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        if !self.state.is_active() {
            return 0.0;
        }
        let total = self.duration.as_duration();
        if total.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / total.as_secs_f32()).min(1.0)
    }

    /// Starts from zero elapsed time. Returns false if already started.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.state.is_active() {
            return false;
        }
        self.state = SlideshowState::Running;
        self.banked = Duration::ZERO;
        self.begin_segment(scheduler);
        true
    }

    /// Freezes elapsed time. Returns false unless running.
    pub fn pause<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.banked = self.elapsed(scheduler.now());
        self.segment_start = None;
        self.cancel_timer(scheduler);
        self.state = SlideshowState::Paused;
        true
    }

    /// Continues the current item's remaining time. Returns false unless paused.
    pub fn resume<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if !self.state.is_paused() {
            return false;
        }
        self.state = SlideshowState::Running;
        self.begin_segment(scheduler);
        true
    }

    /// Stops and discards elapsed time. Returns false if already stopped.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.cancel_timer(scheduler);
        self.state = SlideshowState::Stopped;
        self.banked = Duration::ZERO;
        self.segment_start = None;
        true
    }

    /// Starts over from zero elapsed time whether or not it was running.
    pub fn restart<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        self.start(scheduler);
    }

    /// Resets elapsed time for a new active item.
    ///
    /// A running slideshow gets a fresh full-duration timer; a paused one
    /// stays paused at zero.
    pub fn reset_elapsed<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.banked = Duration::ZERO;
        if self.state.is_running() {
            self.begin_segment(scheduler);
        }
    }

    /// Changes the per-item duration, keeping elapsed time.
    pub fn set_duration<S: Scheduler + ?Sized>(
        &mut self,
        duration: SlideDuration,
        scheduler: &mut S,
    ) {
        self.duration = duration;
        if self.state.is_running() {
            self.banked = self.elapsed(scheduler.now());
            self.begin_segment(scheduler);
        }
    }

    /// Handles a fired advance timer. Returns true if the active item's
    /// time is up and the orchestrator should advance.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) || !self.state.is_running() {
            return false;
        }
        self.timer = None;
        true
    }

    fn begin_segment<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.cancel_timer(scheduler);
        self.segment_start = Some(scheduler.now());
        let remaining = self.duration.as_duration().saturating_sub(self.banked);
        self.timer = Some(scheduler.schedule(remaining, Timer::SlideshowAdvance));
    }

    fn cancel_timer<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}
