// SPDX-License-Identifier: MPL-2.0
//! Headless demo: drives a timeline in real time and logs what a host
//! would render.
//!
//! ```text
//! timeline-demo [--items FILE] [--count N] [--mode MODE] [--slideshow]
//!               [--duration-ms MS] [--config-dir DIR]
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use timeline_core::config::{self, TimelineConfig};
use timeline_core::domain::{Axis, ItemList, SlideDuration, TimelineItem, TimelineMode};
use timeline_core::driver;
use timeline_core::scheduler::TimerQueue;
use timeline_core::scroll::{
    ContainerMetrics, ElementBox, ElementPart, LayoutSnapshot, ViewportMeasurer,
};
use timeline_core::{Effect, Message, Timeline, TimelineEvent, TimelineProps};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 600.0;
const CARD_HEIGHT: f32 = 180.0;
const STEP_INTERVAL: Duration = Duration::from_millis(400);

struct Flags {
    items: Option<PathBuf>,
    count: usize,
    mode: Option<TimelineMode>,
    slideshow: bool,
    duration_ms: Option<u64>,
    config_dir: Option<PathBuf>,
}

/// Layout shared by the host and the driver task. The host applies every
/// scroll it performs so later decisions see the real offset.
#[derive(Clone)]
struct SharedLayout(Arc<Mutex<LayoutSnapshot>>);

impl SharedLayout {
    fn new(layout: LayoutSnapshot) -> Self {
        Self(Arc::new(Mutex::new(layout)))
    }

    /// Scrolls the container and returns its new metrics.
    fn scroll_to(&self, axis: Axis, offset: f32) -> Option<ContainerMetrics> {
        let mut layout = self.0.lock().ok()?;
        layout.scroll_to(axis, offset);
        layout.container()
    }
}

impl ViewportMeasurer for SharedLayout {
    fn container(&self) -> Option<ContainerMetrics> {
        self.0.lock().ok()?.container()
    }

    fn element(&self, id: &str, part: ElementPart) -> Option<ElementBox> {
        self.0.lock().ok()?.element(id, part)
    }
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        items: args.opt_value_from_str("--items")?,
        count: args.opt_value_from_str("--count")?.unwrap_or(8),
        mode: args.opt_value_from_str("--mode")?,
        slideshow: args.contains("--slideshow"),
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = parse_flags()?;
    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default configuration");
    }

    let items = match &flags.items {
        Some(path) => config::load_items(path)?,
        None => sample_items(flags.count),
    };
    let props = props_from(&config, &flags);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run_demo(items, props, flags.slideshow));
    Ok(())
}

fn props_from(config: &TimelineConfig, flags: &Flags) -> TimelineProps {
    let mut props = TimelineProps::from(config);
    if let Some(mode) = flags.mode {
        props.mode = mode;
    }
    if let Some(ms) = flags.duration_ms {
        props.slide_item_duration = SlideDuration::new(ms);
    }
    props
}

fn sample_items(count: usize) -> ItemList {
    (0..count)
        .map(|i| TimelineItem::with_id(format!("event-{i}"), format!("Event {}", i + 1)))
        .collect()
}

/// Lays items out in a strip along the mode's axis.
fn layout_for(items: &ItemList, props: &TimelineProps) -> LayoutSnapshot {
    let axis = props.mode.axis();
    let slot = match axis {
        Axis::Horizontal => props.item_width.value(),
        Axis::Vertical => CARD_HEIGHT,
    };
    let extent = slot * items.len() as f32;
    let container = ContainerMetrics {
        client_width: VIEWPORT_WIDTH,
        client_height: VIEWPORT_HEIGHT,
        scroll_width: if axis == Axis::Horizontal { extent } else { VIEWPORT_WIDTH },
        scroll_height: if axis == Axis::Vertical { extent } else { VIEWPORT_HEIGHT },
        ..ContainerMetrics::default()
    };

    let mut layout = LayoutSnapshot::new();
    layout.set_container(container);
    for (index, key) in items.keys().iter().enumerate() {
        let offset = slot * index as f32;
        let (marker, content) = match axis {
            Axis::Horizontal => (
                ElementBox::new(offset, 0.0, 24.0, 24.0),
                ElementBox::new(offset, 40.0, slot, CARD_HEIGHT),
            ),
            Axis::Vertical => (
                ElementBox::new(0.0, offset, 24.0, 24.0),
                ElementBox::new(40.0, offset, 300.0, CARD_HEIGHT - 20.0),
            ),
        };
        layout.set_element(key.to_id(), ElementPart::Marker, marker);
        layout.set_element(key.to_id(), ElementPart::Content, content);
    }
    layout
}

async fn run_demo(items: ItemList, props: TimelineProps, slideshow: bool) {
    let layout = SharedLayout::new(layout_for(&items, &props));
    let Some(last) = items.last_index() else {
        tracing::warn!("no items to show");
        return;
    };
    let timeline = Timeline::new(items, props, TimerQueue::new(), layout.clone());
    tracing::info!(
        mode = %timeline.mode(),
        items = timeline.items().len(),
        active = ?timeline.active_id(),
        "timeline mounted"
    );
    let mut handle = driver::spawn(timeline);

    let mut stepper = tokio::time::interval(STEP_INTERVAL);
    if slideshow {
        send(&handle.messages, Message::StartSlideshow);
    }

    loop {
        tokio::select! {
            effect = handle.effects.recv() => {
                let Some(effect) = effect else { break };
                match effect {
                    Effect::Notify(event) => {
                        tracing::info!(?event, "timeline event");
                        let finished = match event {
                            TimelineEvent::SlideshowStopped => true,
                            TimelineEvent::ActiveItemChanged { index, .. } => {
                                !slideshow && index == last
                            }
                            _ => false,
                        };
                        if finished {
                            break;
                        }
                    }
                    Effect::ScrollTo(intent) => {
                        tracing::info!(
                            axis = ?intent.axis,
                            offset = intent.target_offset,
                            reason = ?intent.reason,
                            "scroll"
                        );
                        let scrolled = layout.scroll_to(intent.axis, intent.target_offset);
                        if let Some(container) = scrolled {
                            send(&handle.messages, Message::ContainerScrolled(container));
                        }
                    }
                }
            }
            _ = stepper.tick(), if !slideshow => send(&handle.messages, Message::Next),
        }
    }

    drop(handle.messages);
    match handle.task.await {
        Ok(timeline) => tracing::info!(active = ?timeline.active_id(), "timeline stopped"),
        Err(err) => tracing::error!(error = %err, "timeline driver failed"),
    }
}

fn send(sender: &tokio::sync::mpsc::UnboundedSender<Message>, message: Message) {
    if sender.send(message).is_err() {
        tracing::warn!("timeline driver is no longer running");
    }
}
