// SPDX-License-Identifier: MPL-2.0
//! Construction parameters for a timeline.

use crate::config::TimelineConfig;
use crate::domain::{DebounceDelay, FrameDelay, ItemWidth, SlideDuration, TimelineMode};

/// Explicit parameters passed when mounting a timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineProps {
    pub mode: TimelineMode,
    /// Initial active index; clamped into the initial list.
    pub active_item_index: usize,
    pub slide_item_duration: SlideDuration,
    /// Start the slideshow on mount.
    pub slide_show_running: bool,
    /// Reconcile item updates instead of resetting on every update.
    pub allow_dynamic_update: bool,
    pub item_width: ItemWidth,
    pub debounce: DebounceDelay,
    pub frame_delay: FrameDelay,
    /// Ignore [`Message::Key`](super::Message::Key) input.
    pub disable_nav_on_key: bool,
}

impl Default for TimelineProps {
    fn default() -> Self {
        Self {
            mode: TimelineMode::default(),
            active_item_index: 0,
            slide_item_duration: SlideDuration::default(),
            slide_show_running: false,
            allow_dynamic_update: false,
            item_width: ItemWidth::default(),
            debounce: DebounceDelay::default(),
            frame_delay: FrameDelay::default(),
            disable_nav_on_key: false,
        }
    }
}

impl From<&TimelineConfig> for TimelineProps {
    fn from(config: &TimelineConfig) -> Self {
        let defaults = Self::default();
        Self {
            mode: config.layout.mode.unwrap_or(defaults.mode),
            active_item_index: config.navigation.active_item_index.unwrap_or(0),
            slide_item_duration: config
                .slideshow
                .item_duration_ms
                .map_or(defaults.slide_item_duration, SlideDuration::new),
            slide_show_running: config.slideshow.autostart.unwrap_or(false),
            allow_dynamic_update: config.navigation.allow_dynamic_update.unwrap_or(false),
            item_width: config
                .layout
                .item_width
                .map_or(defaults.item_width, ItemWidth::new),
            debounce: config
                .navigation
                .debounce_ms
                .map_or(defaults.debounce, DebounceDelay::new),
            frame_delay: config
                .layout
                .frame_delay_ms
                .map_or(defaults.frame_delay, FrameDelay::new),
            disable_nav_on_key: config.navigation.disable_nav_on_key.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_yields_default_props() {
        assert_eq!(
            TimelineProps::from(&TimelineConfig::default()),
            TimelineProps::default()
        );
    }

    #[test]
    fn config_values_are_clamped_through_newtypes() {
        let mut config = TimelineConfig::default();
        config.navigation.debounce_ms = Some(1_000_000);
        config.layout.mode = Some(TimelineMode::Tree);
        config.slideshow.autostart = Some(true);

        let props = TimelineProps::from(&config);
        assert_eq!(props.debounce, DebounceDelay::new(2_000));
        assert_eq!(props.mode, TimelineMode::Tree);
        assert!(props.slide_show_running);
    }
}
