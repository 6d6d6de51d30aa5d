// SPDX-License-Identifier: MPL-2.0
//! Persistent timeline defaults stored in a `timeline.toml` file.
//!
//! # Configuration Sections
//!
//! - `[navigation]` - Initial index, debounce and dynamic update behavior
//! - `[slideshow]` - Per-item duration and autostart
//! - `[layout]` - Mode, item width and scroll frame delay
//!
//! Every field is optional. Missing fields fall back to the defaults in
//! [`defaults`], and out-of-range values are clamped when the config is
//! turned into [`TimelineProps`](crate::timeline::TimelineProps).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set the `TIMELINE_CORE_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use timeline_core::config;
//!
//! let (mut config, _warning) = config::load();
//! config.navigation.debounce_ms = Some(200);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod items;

pub use defaults::*;
pub use items::{load_items, parse_items};

use crate::domain::TimelineMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "TimelineCore";
const CONFIG_FILE: &str = "timeline.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TIMELINE_CORE_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Navigation and dynamic update settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Index activated on mount; clamped into the item list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_item_index: Option<usize>,
    /// Reconcile item updates instead of resetting to the first item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_dynamic_update: Option<bool>,
    /// Quiet period before a navigation request commits (milliseconds).
    #[serde(default = "default_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
    /// Ignore arrow/Home/End keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_nav_on_key: Option<bool>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            active_item_index: Some(0),
            allow_dynamic_update: Some(false),
            debounce_ms: default_debounce_ms(),
            disable_nav_on_key: Some(false),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Time each item stays active while the slideshow runs (milliseconds).
    #[serde(
        default = "default_item_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_duration_ms: Option<u64>,
    /// Start the slideshow on mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            item_duration_ms: default_item_duration_ms(),
            autostart: Some(false),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TimelineMode>,
    /// Width of one horizontal slot, used as the look-ahead margin (pixels).
    #[serde(default = "default_item_width", skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f32>,
    /// Delay between a commit and the scroll measurement (milliseconds).
    #[serde(
        default = "default_frame_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_delay_ms: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: Some(TimelineMode::default()),
            item_width: default_item_width(),
            frame_delay_ms: default_frame_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Timeline configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TimelineConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_debounce_ms() -> Option<u64> {
    Some(DEFAULT_DEBOUNCE_MS)
}

fn default_item_duration_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_DURATION_MS)
}

fn default_item_width() -> Option<f32> {
    Some(DEFAULT_ITEM_WIDTH)
}

fn default_frame_delay_ms() -> Option<u64> {
    Some(DEFAULT_FRAME_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A file that exists but
/// cannot be read yields the default config and a warning describing why.
pub fn load() -> (TimelineConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (TimelineConfig, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default timeline config"
                    );
                    return (TimelineConfig::default(), Some(err.to_string()));
                }
            }
        }
    }
    (TimelineConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<TimelineConfig> {
    let content = fs::read_to_string(path)?;
    let config: TimelineConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &TimelineConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &TimelineConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &TimelineConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
