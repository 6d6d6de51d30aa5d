// SPDX-License-Identifier: MPL-2.0
//! Dynamic update reconciliation.
//!
//! When the caller supplies a new item list to a mounted timeline, the
//! transition is classified as a no-op, an append, or a replace, and the
//! active index is carried over accordingly. Anything that is not a strict
//! identity prefix is a replace: the algorithm is O(n) and never tries to
//! match items by content.
//!
//! Identity is the [`ItemKey`](crate::domain::ItemKey) of each slot: the
//! caller id when present, otherwise the slot position. Two id-less lists
//! of the same length are therefore the same list.

use crate::domain::ItemList;

/// How the new list relates to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Same identities in the same order.
    NoOp,
    /// The previous list is a strict prefix of the new one.
    Append,
    /// Anything else: reorder, edit, shrink, or disjoint content.
    Replace,
}

/// Whether the scroll position can be kept across the update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTreatment {
    /// The active item is still the same item at the same position.
    Preserve,
    /// Content under the viewport changed; bring the active item back into view.
    Resync,
}

/// Outcome of reconciling two item lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub classification: Classification,
    /// Active index for the new list: `None` if and only if it is empty.
    pub next_active: Option<usize>,
    pub scroll: ScrollTreatment,
}

/// Classifies the transition from `previous` to `next`.
#[must_use]
pub fn classify(previous: &ItemList, next: &ItemList) -> Classification {
    if previous.same_list(next) || previous.keys() == next.keys() {
        return Classification::NoOp;
    }
    let prefix_len = previous.len();
    if next.len() > prefix_len && next.keys()[..prefix_len] == *previous.keys() {
        Classification::Append
    } else {
        Classification::Replace
    }
}

/// Reconciles `next` against `previous` with `active` as the current index.
#[must_use]
pub fn reconcile(previous: &ItemList, next: &ItemList, active: Option<usize>) -> Reconciliation {
    let classification = classify(previous, next);
    match classification {
        Classification::NoOp | Classification::Append => Reconciliation {
            classification,
            // Growing from an empty list is the only way `active` can be
            // `None` here, and the new list needs an active item.
            next_active: active.or(if next.is_empty() { None } else { Some(0) }),
            scroll: ScrollTreatment::Preserve,
        },
        Classification::Replace => Reconciliation {
            classification,
            next_active: clamp_or_reset(active, next.len()),
            scroll: ScrollTreatment::Resync,
        },
    }
}

/// Reconciliation used when dynamic updates are disabled: every update is
/// a full replace and the active index returns to the first item.
#[must_use]
pub fn reconcile_disabled(next: &ItemList) -> Reconciliation {
    Reconciliation {
        classification: Classification::Replace,
        next_active: if next.is_empty() { None } else { Some(0) },
        scroll: ScrollTreatment::Resync,
    }
}

/// Keeps `active` if it still indexes the new list, otherwise resets to the
/// first item rather than pointing at unrelated content.
fn clamp_or_reset(active: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match active {
        Some(index) if index < len => Some(index),
        _ => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimelineItem;

    fn ids(prefix: &str, range: std::ops::Range<usize>) -> Vec<TimelineItem> {
        range
            .map(|i| TimelineItem::with_id(format!("{prefix}{i}"), format!("Item {i}")))
            .collect()
    }

    #[test]
    fn identical_reference_is_noop() {
        let items = ItemList::new(ids("a", 0..5));
        let result = reconcile(&items, &items.clone(), Some(3));
        assert_eq!(result.classification, Classification::NoOp);
        assert_eq!(result.next_active, Some(3));
        assert_eq!(result.scroll, ScrollTreatment::Preserve);
    }

    #[test]
    fn rebuilt_list_with_same_ids_is_noop() {
        let previous = ItemList::new(ids("a", 0..5));
        let mut edited = ids("a", 0..5);
        edited[2].title = "changed".into();
        let next = ItemList::new(edited);
        assert_eq!(classify(&previous, &next), Classification::NoOp);
    }

    #[test]
    fn strict_prefix_is_append_and_keeps_index() {
        let previous = ItemList::new(ids("a", 0..5));
        let next = ItemList::new(ids("a", 0..8));
        let result = reconcile(&previous, &next, Some(4));
        assert_eq!(result.classification, Classification::Append);
        assert_eq!(result.next_active, Some(4));
        assert_eq!(result.scroll, ScrollTreatment::Preserve);
    }

    #[test]
    fn prefix_mismatch_is_replace() {
        let previous = ItemList::new(ids("a", 0..3));
        let mut reordered = ids("a", 0..5);
        reordered.swap(0, 1);
        let next = ItemList::new(reordered);
        assert_eq!(classify(&previous, &next), Classification::Replace);
    }

    #[test]
    fn same_length_different_ids_is_replace() {
        let previous = ItemList::new(ids("a", 0..4));
        let next = ItemList::new(ids("b", 0..4));
        let result = reconcile(&previous, &next, Some(2));
        assert_eq!(result.classification, Classification::Replace);
        assert_eq!(result.next_active, Some(2));
        assert_eq!(result.scroll, ScrollTreatment::Resync);
    }

    #[test]
    fn shrink_keeps_index_that_still_fits() {
        let previous = ItemList::new(ids("a", 0..13));
        let next = ItemList::new(ids("b", 0..5));
        let result = reconcile(&previous, &next, Some(4));
        assert_eq!(result.classification, Classification::Replace);
        assert_eq!(result.next_active, Some(4));
    }

    #[test]
    fn shrink_past_index_resets_to_first() {
        let previous = ItemList::new(ids("a", 0..13));
        let next = ItemList::new(ids("b", 0..5));
        let result = reconcile(&previous, &next, Some(9));
        assert_eq!(result.next_active, Some(0));
    }

    #[test]
    fn truncating_prefix_is_replace() {
        let previous = ItemList::new(ids("a", 0..5));
        let next = ItemList::new(ids("a", 0..3));
        let result = reconcile(&previous, &next, Some(4));
        assert_eq!(result.classification, Classification::Replace);
        assert_eq!(result.next_active, Some(0));
    }

    #[test]
    fn grow_with_disjoint_content_preserves_valid_index() {
        let previous = ItemList::new(ids("a", 0..5));
        let next = ItemList::new(ids("b", 0..13));
        let result = reconcile(&previous, &next, Some(4));
        assert_eq!(result.classification, Classification::Replace);
        assert_eq!(result.next_active, Some(4));
    }

    #[test]
    fn replace_with_empty_list_has_no_active_index() {
        let previous = ItemList::new(ids("a", 0..5));
        let result = reconcile(&previous, &ItemList::default(), Some(2));
        assert_eq!(result.classification, Classification::Replace);
        assert_eq!(result.next_active, None);
    }

    #[test]
    fn growing_from_empty_activates_first_item() {
        let result = reconcile(&ItemList::default(), &ItemList::new(ids("a", 0..3)), None);
        assert_eq!(result.classification, Classification::Append);
        assert_eq!(result.next_active, Some(0));
    }

    #[test]
    fn anonymous_items_compare_by_position() {
        let previous = ItemList::new(vec![TimelineItem::anonymous("x"); 3]);
        let next = ItemList::new(vec![TimelineItem::anonymous("y"); 5]);
        assert_eq!(classify(&previous, &next), Classification::Append);
    }

    #[test]
    fn named_item_replacing_anonymous_slot_is_replace() {
        let previous = ItemList::new(vec![TimelineItem::anonymous("x"); 2]);
        let mut next_items = vec![TimelineItem::anonymous("x"); 3];
        next_items[1].id = Some("named".into());
        let next = ItemList::new(next_items);
        assert_eq!(classify(&previous, &next), Classification::Replace);
    }

    #[test]
    fn disabled_reconciliation_always_resets() {
        let next = ItemList::new(ids("a", 0..5));
        let result = reconcile_disabled(&next);
        assert_eq!(result.classification, Classification::Replace);
        assert_eq!(result.next_active, Some(0));
        assert_eq!(reconcile_disabled(&ItemList::default()).next_active, None);
    }
}
