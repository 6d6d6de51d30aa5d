// SPDX-License-Identifier: MPL-2.0
//! Real-time driver for a [`Timeline`].
//!
//! The timeline itself never sleeps; its timers live in a virtual-time
//! [`TimerQueue`]. The driver owns the timeline on a tokio task, maps
//! elapsed wall-clock time onto the queue, and wakes up for whichever comes
//! first: the next message from the host or the next timer deadline.
//! Effects are forwarded to the host in the order they were produced.
//!
//! The loop ends when every message sender is dropped or the effect
//! receiver is closed. The timeline is torn down before it is returned.

use crate::scheduler::{Scheduler, TimerQueue};
use crate::scroll::ViewportMeasurer;
use crate::timeline::{Effect, Message, Timeline};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Host side of a spawned timeline.
#[derive(Debug)]
pub struct TimelineHandle<M: ViewportMeasurer> {
    pub messages: mpsc::UnboundedSender<Message>,
    pub effects: mpsc::UnboundedReceiver<Effect>,
    pub task: JoinHandle<Timeline<TimerQueue, M>>,
}

/// Spawns `timeline` on the current tokio runtime.
pub fn spawn<M>(timeline: Timeline<TimerQueue, M>) -> TimelineHandle<M>
where
    M: ViewportMeasurer + Send + 'static,
{
    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let (effect_tx, effect_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(timeline, message_rx, effect_tx));
    TimelineHandle {
        messages: message_tx,
        effects: effect_rx,
        task,
    }
}

/// Drives `timeline` until the message channel closes.
pub async fn run<M: ViewportMeasurer>(
    mut timeline: Timeline<TimerQueue, M>,
    mut messages: mpsc::UnboundedReceiver<Message>,
    effects: mpsc::UnboundedSender<Effect>,
) -> Timeline<TimerQueue, M> {
    let clock = WallClock::new(timeline.scheduler().now());
    tracing::debug!(items = timeline.items().len(), "timeline driver started");

    loop {
        let wake_at = timeline.next_deadline().map(|deadline| clock.instant_for(deadline));
        let produced = tokio::select! {
            message = messages.recv() => match message {
                Some(message) => {
                    // Timers that came due while idle run before the message.
                    let mut produced = timeline.advance_until(clock.virtual_now());
                    produced.extend(timeline.update(message));
                    produced
                }
                None => break,
            },
            () = sleep_until(wake_at) => timeline.advance_until(clock.virtual_now()),
        };

        if !forward(&effects, produced) {
            tracing::debug!("effect receiver closed, stopping timeline driver");
            break;
        }
    }

    timeline.teardown();
    timeline
}

fn forward(sink: &mpsc::UnboundedSender<Effect>, produced: Vec<Effect>) -> bool {
    produced.into_iter().all(|effect| sink.send(effect).is_ok())
}

async fn sleep_until(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Maps virtual scheduler time onto tokio instants.
#[derive(Debug, Clone, Copy)]
struct WallClock {
    origin: Instant,
    base: Duration,
}

impl WallClock {
    fn new(base: Duration) -> Self {
        Self {
            origin: Instant::now(),
            base,
        }
    }

    fn virtual_now(&self) -> Duration {
        self.base + self.origin.elapsed()
    }

    fn instant_for(&self, deadline: Duration) -> Instant {
        self.origin + deadline.saturating_sub(self.base)
    }
}
