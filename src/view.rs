// SPDX-License-Identifier: MPL-2.0
//! Derived per-item view flags.
//!
//! The authoritative active index lives in the navigation controller. The
//! decorated view array is recomputed from it on demand and never stored.

use crate::domain::{CardPosition, ItemList, TimelineMode};

/// Render-ready view of a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Public id (caller id or generated positional id).
    pub id: String,
    pub index: usize,
    /// True for exactly the active item.
    pub active: bool,
    /// False when the layout hides this card.
    pub visible: bool,
    pub position: Option<CardPosition>,
}

/// Computes the `active`/`visible` flags for every item.
///
/// At most one item is active, and it is the one at `active`. An `active`
/// index past the end of the list marks nothing active.
#[must_use]
pub fn derive_flags(items: &ItemList, active: Option<usize>, mode: TimelineMode) -> Vec<ItemView> {
    items
        .keys()
        .iter()
        .zip(items.items())
        .enumerate()
        .map(|(index, (key, item))| {
            let is_active = active == Some(index);
            ItemView {
                id: key.to_id(),
                index,
                active: is_active,
                visible: !mode.shows_only_active_card() || is_active,
                position: item.position,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimelineItem;

    fn list(n: usize) -> ItemList {
        (0..n)
            .map(|i| TimelineItem::with_id(format!("item-{i}"), format!("Item {i}")))
            .collect()
    }

    #[test]
    fn exactly_one_item_is_active() {
        let views = derive_flags(&list(5), Some(3), TimelineMode::Vertical);
        let active: Vec<usize> = views.iter().filter(|v| v.active).map(|v| v.index).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn empty_or_none_marks_nothing_active() {
        assert!(derive_flags(&list(0), None, TimelineMode::Vertical).is_empty());
        let views = derive_flags(&list(3), None, TimelineMode::Vertical);
        assert!(views.iter().all(|v| !v.active));
    }

    #[test]
    fn horizontal_mode_hides_inactive_cards() {
        let views = derive_flags(&list(4), Some(1), TimelineMode::Horizontal);
        let visible: Vec<usize> = views.iter().filter(|v| v.visible).map(|v| v.index).collect();
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn other_modes_show_every_card() {
        for mode in [
            TimelineMode::Vertical,
            TimelineMode::VerticalAlternating,
            TimelineMode::HorizontalAll,
            TimelineMode::Tree,
        ] {
            let views = derive_flags(&list(4), Some(2), mode);
            assert!(views.iter().all(|v| v.visible), "{mode} should show all cards");
        }
    }

    #[test]
    fn position_and_ids_pass_through() {
        let mut item = TimelineItem::anonymous("x");
        item.position = Some(CardPosition::Bottom);
        let views = derive_flags(&ItemList::new(vec![item]), Some(0), TimelineMode::Vertical);
        assert_eq!(views[0].position, Some(CardPosition::Bottom));
        assert_eq!(views[0].id, "timeline-item-0");
    }
}
