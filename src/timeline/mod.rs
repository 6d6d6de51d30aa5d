// SPDX-License-Identifier: MPL-2.0
//! Timeline orchestrator.
//!
//! [`Timeline`] composes the active item controller, the reconciler, the
//! scroll synchronizer and the slideshow. It is the only component with
//! external inputs ([`Message`]) and outputs ([`Effect`]).
//!
//! Every settled index change runs the same sequence: the index commits,
//! the derived flags follow from it, the slideshow's elapsed time resets,
//! and a scroll frame is scheduled. The scroll command itself is produced
//! when that frame fires, so it measures the layout after the change was
//! rendered. A newer frame always replaces an older one.

mod messages;
mod props;

pub use messages::{Effect, Message, TimelineEvent};
pub use props::TimelineProps;

use crate::domain::{ItemKey, ItemList, TimelineMode};
use crate::navigation::{ActiveIndexState, ActiveItemController, NavCommand, Request};
use crate::reconcile::{self, Classification, Reconciliation, ScrollTreatment};
use crate::scheduler::{Fired, Scheduler, Timer, TimerHandle, TimerQueue};
use crate::scroll::{ScrollEndTracker, ScrollIntent, ScrollSynchronizer, ViewportMeasurer};
use crate::slideshow::{Slideshow, SlideshowState};
use crate::view::{derive_flags, ItemView};
use std::time::Duration;

/// A mounted timeline.
#[derive(Debug)]
pub struct Timeline<S: Scheduler, M: ViewportMeasurer> {
    items: ItemList,
    mode: TimelineMode,
    props: TimelineProps,
    controller: ActiveItemController,
    slideshow: Slideshow,
    synchronizer: ScrollSynchronizer,
    scroll_end: ScrollEndTracker,
    scroll_frame: Option<TimerHandle>,
    scheduler: S,
    measurer: M,
}

impl<S: Scheduler, M: ViewportMeasurer> Timeline<S, M> {
    /// Mounts a timeline over `items`.
    ///
    /// Schedules the initial scroll frame so the initial active item is
    /// brought into view, and starts the slideshow if requested.
    pub fn new(items: ItemList, props: TimelineProps, scheduler: S, measurer: M) -> Self {
        let controller =
            ActiveItemController::new(items.len(), props.active_item_index, props.debounce);
        let mut timeline = Self {
            mode: props.mode,
            controller,
            slideshow: Slideshow::new(props.slide_item_duration),
            synchronizer: ScrollSynchronizer::new(props.item_width),
            scroll_end: ScrollEndTracker::new(),
            scroll_frame: None,
            items,
            props,
            scheduler,
            measurer,
        };
        if timeline.controller.index().is_some() {
            timeline.schedule_scroll_frame();
        }
        if timeline.props.slide_show_running {
            let mut ignored = Vec::new();
            timeline.start_slideshow(&mut ignored);
        }
        timeline
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    #[must_use]
    pub fn mode(&self) -> TimelineMode {
        self.mode
    }

    #[must_use]
    pub fn props(&self) -> &TimelineProps {
        &self.props
    }

    /// Committed active index; `None` if and only if the list is empty.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.controller.index()
    }

    /// Active index in the signed form used by external props (`-1` when empty).
    #[must_use]
    pub fn active_index_signed(&self) -> i64 {
        self.controller.index().map_or(-1, |i| i as i64)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<String> {
        self.active_key().map(ItemKey::to_id)
    }

    #[must_use]
    pub fn index_state(&self) -> ActiveIndexState {
        self.controller.state()
    }

    /// True when "previous" has nothing to go to; disable the control.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.controller.at_start()
    }

    /// True when "next" has nothing to go to; disable the control.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.controller.at_end()
    }

    /// Items decorated with `active`/`visible` flags for rendering.
    #[must_use]
    pub fn views(&self) -> Vec<ItemView> {
        derive_flags(&self.items, self.controller.index(), self.mode)
    }

    #[must_use]
    pub fn slideshow_state(&self) -> SlideshowState {
        self.slideshow.state()
    }

    #[must_use]
    pub fn elapsed_in_current_item(&self) -> Duration {
        self.slideshow.elapsed(self.scheduler.now())
    }

    /// Slideshow progress for the active item, `0.0..=1.0`.
    #[must_use]
    pub fn slideshow_progress(&self) -> f32 {
        self.slideshow.progress(self.scheduler.now())
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Handles one message to completion and returns the resulting effects.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        match message {
            Message::GoTo(index) => {
                self.controller.go_to(index, &mut self.scheduler);
            }
            Message::JumpToId(id) => {
                if let Some(index) = self.items.position_of(&id) {
                    self.controller.go_to(index as i64, &mut self.scheduler);
                }
            }
            Message::Next => self.navigate(NavCommand::Next, &mut effects),
            Message::Previous => self.navigate(NavCommand::Previous, &mut effects),
            Message::First => self.navigate(NavCommand::First, &mut effects),
            Message::Last => self.navigate(NavCommand::Last, &mut effects),
            Message::Key(key) => {
                if !self.props.disable_nav_on_key {
                    if let Some(command) = key.command(self.mode) {
                        self.navigate(command, &mut effects);
                    }
                }
            }
            Message::SetItems(items) => self.set_items(items, &mut effects),
            Message::SetMode(mode) => {
                if mode != self.mode {
                    self.mode = mode;
                    self.scroll_end.reset();
                    self.schedule_scroll_frame();
                }
            }
            Message::StartSlideshow => self.start_slideshow(&mut effects),
            Message::PauseSlideshow => {
                if self.slideshow.pause(&mut self.scheduler) {
                    effects.push(Effect::Notify(TimelineEvent::SlideshowPaused));
                }
            }
            Message::ResumeSlideshow => {
                if self.slideshow.resume(&mut self.scheduler) {
                    effects.push(Effect::Notify(TimelineEvent::SlideshowResumed));
                }
            }
            Message::StopSlideshow => self.stop_slideshow(&mut effects),
            Message::RestartSlideshow => self.restart_slideshow(&mut effects),
            Message::ContainerScrolled(metrics) => {
                if self.scroll_end.observe(self.mode.axis(), &metrics) {
                    effects.push(Effect::Notify(TimelineEvent::ScrollEnd));
                }
            }
            Message::TimerFired(fired) => self.on_timer(fired, &mut effects),
        }
        effects
    }

    /// Cancels every pending timer and stops the slideshow.
    ///
    /// Called automatically on drop; calling it twice is harmless.
    pub fn teardown(&mut self) {
        self.controller.cancel(&mut self.scheduler);
        self.slideshow.stop(&mut self.scheduler);
        if let Some(handle) = self.scroll_frame.take() {
            self.scheduler.cancel(handle);
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn navigate(&mut self, command: NavCommand, effects: &mut Vec<Effect>) {
        if let Request::Scheduled { .. } = self.controller.apply(command, &mut self.scheduler) {
            let event = match command {
                NavCommand::First => TimelineEvent::First,
                NavCommand::Last => TimelineEvent::Last,
                NavCommand::Next => TimelineEvent::Next,
                NavCommand::Previous => TimelineEvent::Previous,
            };
            effects.push(Effect::Notify(event));
        }
    }

    /// Runs the post-commit sequence for a new active index.
    fn on_active_index_changed(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(key) = self.items.key(index) else {
            return;
        };
        tracing::debug!(index, id = %key, "timeline active item committed");
        effects.push(Effect::Notify(TimelineEvent::ActiveItemChanged {
            id: key.to_id(),
            index,
        }));

        self.restart_item_clock(index, effects);
        self.schedule_scroll_frame();
    }

    /// Resets the slideshow clock for the item at `index`, stopping the
    /// slideshow when that item is the last one.
    fn restart_item_clock(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if self.slideshow.state().is_active() && Some(index) == self.items.last_index() {
            self.stop_slideshow(effects);
        } else {
            self.slideshow.reset_elapsed(&mut self.scheduler);
        }
    }

    // =========================================================================
    // Dynamic updates
    // =========================================================================

    fn set_items(&mut self, items: ItemList, effects: &mut Vec<Effect>) {
        let reconciliation = if self.props.allow_dynamic_update {
            reconcile::reconcile(&self.items, &items, self.controller.index())
        } else {
            reconcile::reconcile_disabled(&items)
        };
        let Reconciliation {
            classification,
            next_active,
            scroll,
        } = reconciliation;
        tracing::debug!(
            ?classification,
            previous_len = self.items.len(),
            next_len = items.len(),
            ?next_active,
            "timeline items reconciled"
        );

        let previous_index = self.controller.index();
        let previous_key = self.active_key().cloned();
        self.items = items;
        self.controller.reset_list(
            self.items.len(),
            next_active,
            classification != Classification::Replace,
            &mut self.scheduler,
        );

        if self.items.is_empty() {
            self.stop_slideshow(effects);
            if let Some(handle) = self.scroll_frame.take() {
                self.scheduler.cancel(handle);
            }
            self.scroll_end.reset();
            return;
        }

        if scroll == ScrollTreatment::Resync {
            self.scroll_end.reset();
        }
        let Some(index) = next_active else {
            return;
        };
        if next_active != previous_index || self.active_key() != previous_key.as_ref() {
            self.on_active_index_changed(index, effects);
            return;
        }
        if classification == Classification::Replace {
            self.restart_item_clock(index, effects);
        }
        if scroll == ScrollTreatment::Resync {
            self.schedule_scroll_frame();
        }
    }

    // =========================================================================
    // Slideshow
    // =========================================================================

    fn start_slideshow(&mut self, effects: &mut Vec<Effect>) {
        let Some(index) = self.controller.index() else {
            return;
        };
        // Starting on the last item would stop immediately; use restart.
        if Some(index) == self.items.last_index() {
            return;
        }
        if self.slideshow.start(&mut self.scheduler) {
            effects.push(Effect::Notify(TimelineEvent::SlideshowStarted));
        }
    }

    fn stop_slideshow(&mut self, effects: &mut Vec<Effect>) {
        if self.slideshow.stop(&mut self.scheduler) {
            effects.push(Effect::Notify(TimelineEvent::SlideshowStopped));
        }
    }

    fn restart_slideshow(&mut self, effects: &mut Vec<Effect>) {
        if self.items.is_empty() {
            return;
        }
        if let Some(settled) = self.controller.commit_now(0, &mut self.scheduler) {
            self.on_active_index_changed(settled.index, effects);
        }
        if self.items.last_index() == Some(0) {
            return;
        }
        self.slideshow.restart(&mut self.scheduler);
        effects.push(Effect::Notify(TimelineEvent::SlideshowStarted));
    }

    fn advance_slideshow(&mut self, effects: &mut Vec<Effect>) {
        // A request still inside its debounce window wins over the tick.
        if self.controller.pending().is_some() {
            self.slideshow.reset_elapsed(&mut self.scheduler);
            return;
        }
        let next = match (self.controller.index(), self.items.last_index()) {
            (Some(index), Some(last)) if index < last => index + 1,
            _ => {
                self.stop_slideshow(effects);
                return;
            }
        };
        if let Some(settled) = self.controller.commit_now(next, &mut self.scheduler) {
            self.on_active_index_changed(settled.index, effects);
        }
    }

    // =========================================================================
    // Timers and scrolling
    // =========================================================================

    fn on_timer(&mut self, fired: Fired, effects: &mut Vec<Effect>) {
        match fired.timer {
            Timer::Settle => {
                if let Some(settled) = self.controller.settle(fired.handle) {
                    self.on_active_index_changed(settled.index, effects);
                }
            }
            Timer::SlideshowAdvance => {
                if self.slideshow.on_timer(fired.handle) {
                    self.advance_slideshow(effects);
                }
            }
            Timer::ScrollFrame => {
                if self.scroll_frame == Some(fired.handle) {
                    self.scroll_frame = None;
                    if let Some(intent) = self.sync_scroll() {
                        effects.push(Effect::ScrollTo(intent));
                    }
                }
            }
        }
    }

    fn schedule_scroll_frame(&mut self) {
        if let Some(handle) = self.scroll_frame.take() {
            self.scheduler.cancel(handle);
        }
        let delay = self.props.frame_delay.as_duration();
        self.scroll_frame = Some(self.scheduler.schedule(delay, Timer::ScrollFrame));
    }

    fn sync_scroll(&mut self) -> Option<ScrollIntent> {
        let id = self.active_key()?.to_id();
        self.synchronizer.sync(self.mode, &id, &self.measurer)
    }

    fn active_key(&self) -> Option<&ItemKey> {
        self.controller.index().and_then(|i| self.items.key(i))
    }
}

impl<M: ViewportMeasurer> Timeline<TimerQueue, M> {
    /// Advances virtual time by `by`, dispatching every timer that comes due
    /// (including timers scheduled while handling earlier ones).
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        let until = self.scheduler.now() + by;
        self.advance_until(until)
    }

    /// Dispatches every timer due at or before `until` and moves the clock there.
    pub fn advance_until(&mut self, until: Duration) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(fired) = self.scheduler.pop_due(until) {
            effects.extend(self.update(Message::TimerFired(fired)));
        }
        self.scheduler.set_now(until);
        effects
    }

    /// Deadline of the next pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }
}

impl<S: Scheduler, M: ViewportMeasurer> Drop for Timeline<S, M> {
    fn drop(&mut self) {
        self.teardown();
    }
}
