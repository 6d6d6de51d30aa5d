// SPDX-License-Identifier: MPL-2.0
//! Item list files.
//!
//! Items can be supplied as a TOML document with one `[[items]]` table per
//! entry:
//!
//! ```toml
//! [[items]]
//! id = "launch"
//! title = "May 1940"
//! content = "Dunkirk evacuation"
//!
//! [[items]]
//! title = "June 1940"
//! ```
//!
//! Caller ids must be unique within the file; items without an id are
//! identified by their position.

use crate::domain::{ItemList, TimelineItem};
use crate::error::{ItemsError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ItemsFile {
    #[serde(default)]
    items: Vec<TimelineItem>,
}

/// Parses an item list from TOML text.
pub fn parse_items(content: &str) -> std::result::Result<ItemList, ItemsError> {
    let file: ItemsFile =
        toml::from_str(content).map_err(|err| ItemsError::Malformed(err.to_string()))?;
    let list = ItemList::new(file.items);
    if let Some(id) = list.first_duplicate_id() {
        return Err(ItemsError::DuplicateId(id.to_string()));
    }
    Ok(list)
}

/// Reads and parses an item list file.
pub fn load_items(path: &Path) -> Result<ItemList> {
    let content = fs::read_to_string(path)?;
    let list = parse_items(&content)?;
    tracing::debug!(path = %path.display(), count = list.len(), "loaded timeline items");
    Ok(list)
}
