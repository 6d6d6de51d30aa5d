// SPDX-License-Identifier: MPL-2.0
//! `timeline_core` is the navigation and synchronization core of an
//! interactive timeline widget.
//!
//! It owns which item is active, debounces rapid navigation, keeps the
//! active item scrolled into view, runs an auto-advancing slideshow, and
//! reconciles caller-supplied item list updates. Rendering and input
//! capture belong to the host: it feeds [`timeline::Message`]s in and
//! applies the returned [`timeline::Effect`]s.
//!
//! # Modules
//!
//! - [`domain`]: Items, identity, layout modes and bounded values
//! - [`navigation`]: The debounced active item controller and key mapping
//! - [`reconcile`]: Classification of item list updates
//! - [`scroll`]: Viewport measurement and scroll decisions
//! - [`slideshow`]: The auto-advance timer state machine
//! - [`timeline`]: The orchestrator tying the above together
//! - [`scheduler`]: Injectable timers and the virtual-time queue
//! - [`driver`]: A tokio task that runs a timeline in real time
//! - [`config`]: Persisted defaults and item files

#![doc(html_root_url = "https://docs.rs/timeline_core/0.3.0")]

pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod navigation;
pub mod reconcile;
pub mod scheduler;
pub mod scroll;
pub mod slideshow;
pub mod timeline;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use timeline::{Effect, Message, Timeline, TimelineEvent, TimelineProps};
