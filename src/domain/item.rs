// SPDX-License-Identifier: MPL-2.0
//! Timeline items and their identity.
//!
//! Items are supplied wholesale by the caller. The core never looks at the
//! display payloads; it only cares about identity and position, which is
//! captured once per list in an [`ItemList`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Prefix of the ids generated for items the caller did not name.
pub const POSITIONAL_ID_PREFIX: &str = "timeline-item-";

/// Which side of the line a card is drawn on. Passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPosition {
    Top,
    Bottom,
}

/// A caller-supplied timeline entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Stable identifier. Items without one are identified by position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detailed_content: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<CardPosition>,
}

impl TimelineItem {
    /// Creates an item with a caller id and a title.
    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Creates an item without an id; it will be identified by its slot.
    pub fn anonymous(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Identity of an item within a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// The caller supplied this id.
    Caller(String),
    /// No id was supplied; the item is identified by its index.
    Positional(usize),
}

impl ItemKey {
    fn for_item(item: &TimelineItem, index: usize) -> Self {
        match &item.id {
            Some(id) => ItemKey::Caller(id.clone()),
            None => ItemKey::Positional(index),
        }
    }

    /// Returns the public string id of this key.
    #[must_use]
    pub fn to_id(&self) -> String {
        self.to_string()
    }

    /// Returns true if `id` names this key.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        match self {
            ItemKey::Caller(own) => own == id,
            ItemKey::Positional(index) => id
                .strip_prefix(POSITIONAL_ID_PREFIX)
                .and_then(|rest| rest.parse::<usize>().ok())
                == Some(*index),
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Caller(id) => f.write_str(id),
            ItemKey::Positional(index) => write!(f, "{POSITIONAL_ID_PREFIX}{index}"),
        }
    }
}

/// An immutable, shareable item list with precomputed identities.
///
/// Cloning is cheap and clones compare as the same list in
/// [`ItemList::same_list`], which is how an unchanged list is recognized
/// without walking it.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Arc<[TimelineItem]>,
    keys: Arc<[ItemKey]>,
}

impl ItemList {
    pub fn new(items: Vec<TimelineItem>) -> Self {
        let keys: Vec<ItemKey> = items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemKey::for_item(item, index))
            .collect();
        Self {
            items: items.into(),
            keys: keys.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    #[must_use]
    pub fn keys(&self) -> &[ItemKey] {
        &self.keys
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TimelineItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn key(&self, index: usize) -> Option<&ItemKey> {
        self.keys.get(index)
    }

    /// Resolves an id to the index of the first item it names.
    ///
    /// Caller ids win over generated positional ids.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.keys
            .iter()
            .position(|key| matches!(key, ItemKey::Caller(own) if own == id))
            .or_else(|| self.keys.iter().position(|key| key.matches(id)))
    }

    /// Returns the index of the last item, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// Returns true if both handles point at the same allocation.
    #[must_use]
    pub fn same_list(&self, other: &ItemList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Returns the first caller id that appears more than once.
    #[must_use]
    pub fn first_duplicate_id(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.keys.iter().find_map(|key| match key {
            ItemKey::Caller(id) if !seen.insert(id.as_str()) => Some(id.as_str()),
            _ => None,
        })
    }
}

impl From<Vec<TimelineItem>> for ItemList {
    fn from(items: Vec<TimelineItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<TimelineItem> for ItemList {
    fn from_iter<I: IntoIterator<Item = TimelineItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
