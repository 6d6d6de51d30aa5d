// SPDX-License-Identifier: MPL-2.0
//! Item list updates on a mounted timeline, driven through the public API.

use std::time::Duration;
use timeline_core::domain::{ItemList, TimelineItem};
use timeline_core::reconcile::{self, Classification, ScrollTreatment};
use timeline_core::scheduler::TimerQueue;
use timeline_core::scroll::LayoutSnapshot;
use timeline_core::{Effect, Message, Timeline, TimelineEvent, TimelineProps};

const SETTLE: Duration = Duration::from_millis(200);

fn named(count: usize) -> ItemList {
    (0..count)
        .map(|i| TimelineItem::with_id(format!("n{i}"), format!("Named {i}")))
        .collect()
}

fn anonymous(count: usize) -> ItemList {
    (0..count)
        .map(|i| TimelineItem::anonymous(format!("Anonymous {i}")))
        .collect()
}

fn mount(items: ItemList, active: usize) -> Timeline<TimerQueue, LayoutSnapshot> {
    let props = TimelineProps {
        active_item_index: active,
        allow_dynamic_update: true,
        ..TimelineProps::default()
    };
    let mut timeline = Timeline::new(items, props, TimerQueue::new(), LayoutSnapshot::new());
    timeline.advance(SETTLE);
    timeline
}

fn active_changes(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect.as_event() {
            Some(TimelineEvent::ActiveItemChanged { index, .. }) => Some(*index),
            _ => None,
        })
        .collect()
}

fn assert_active_in_bounds(timeline: &Timeline<TimerQueue, LayoutSnapshot>) {
    match timeline.active_index() {
        None => assert!(timeline.items().is_empty()),
        Some(index) => assert!(index < timeline.items().len()),
    }
    let active_views = timeline.views().iter().filter(|v| v.active).count();
    assert_eq!(active_views, usize::from(!timeline.items().is_empty()));
}

#[test]
fn growing_five_to_thirteen_keeps_position() {
    let mut timeline = mount(named(5), 4);
    let effects = timeline.update(Message::SetItems(named(13)));

    assert!(active_changes(&effects).is_empty());
    assert_eq!(timeline.active_index(), Some(4));
    assert!(!timeline.at_end());
    assert_active_in_bounds(&timeline);
}

#[test]
fn shrinking_thirteen_to_five_resets_when_active_is_gone() {
    let mut timeline = mount(named(13), 12);
    let effects = timeline.update(Message::SetItems(named(5)));

    assert_eq!(active_changes(&effects), vec![0]);
    assert_eq!(timeline.active_id().as_deref(), Some("n0"));
    assert_active_in_bounds(&timeline);
}

#[test]
fn shrinking_keeps_active_that_still_fits() {
    let mut timeline = mount(named(13), 2);
    let effects = timeline.update(Message::SetItems(named(5)));

    assert!(active_changes(&effects).is_empty());
    assert_eq!(timeline.active_index(), Some(2));
}

#[test]
fn anonymous_lists_are_matched_by_position() {
    let list = anonymous(5);
    assert_eq!(
        reconcile::classify(&list, &anonymous(5)),
        Classification::NoOp
    );
    assert_eq!(
        reconcile::classify(&list, &anonymous(8)),
        Classification::Append
    );

    let mut timeline = mount(anonymous(5), 3);
    assert!(timeline.update(Message::SetItems(anonymous(8))).is_empty());
    assert_eq!(timeline.active_id().as_deref(), Some("timeline-item-3"));
}

#[test]
fn reordering_is_a_replace_with_resync() {
    let previous = named(4);
    let reordered: ItemList = ["n1", "n0", "n2", "n3"]
        .into_iter()
        .map(|id| TimelineItem::with_id(id, "Item"))
        .collect();

    let result = reconcile::reconcile(&previous, &reordered, Some(1));
    assert_eq!(result.classification, Classification::Replace);
    assert_eq!(result.scroll, ScrollTreatment::Resync);
    assert_eq!(result.next_active, Some(1));
}

#[test]
fn repeated_identical_updates_are_idempotent() {
    let mut timeline = mount(named(6), 3);
    for _ in 0..5 {
        assert!(timeline.update(Message::SetItems(named(6))).is_empty());
    }
    assert_eq!(timeline.active_index(), Some(3));
}

#[test]
fn active_index_stays_valid_across_a_sequence_of_updates() {
    let mut timeline = mount(named(3), 2);
    let sizes = [10, 1, 0, 7, 7, 2, 15, 0, 4];
    for size in sizes {
        timeline.update(Message::SetItems(named(size)));
        assert_active_in_bounds(&timeline);

        timeline.update(Message::Last);
        timeline.advance(SETTLE);
        assert_active_in_bounds(&timeline);
    }
}

fn disjoint(count: usize) -> ItemList {
    (0..count)
        .map(|i| TimelineItem::with_id(format!("d{i}"), format!("Disjoint {i}")))
        .collect()
}

#[test]
fn disjoint_shrink_keeps_valid_active_index() {
    let mut timeline = mount(named(13), 4);
    timeline.update(Message::SetItems(disjoint(5)));
    assert_eq!(timeline.active_index(), Some(4));
    assert_eq!(timeline.active_id().as_deref(), Some("d4"));
}

#[test]
fn disjoint_grow_keeps_valid_active_index() {
    let previous = named(5);
    let next = disjoint(13);
    let result = reconcile::reconcile(&previous, &next, Some(4));
    assert_eq!(result.classification, Classification::Replace);
    assert_eq!(result.next_active, Some(4));

    let mut timeline = mount(previous, 4);
    timeline.update(Message::SetItems(next));
    assert_eq!(timeline.active_index(), Some(4));
    assert_active_in_bounds(&timeline);
}

#[test]
fn same_allocation_is_a_noop() {
    let list = named(7);
    let result = reconcile::reconcile(&list, &list.clone(), Some(6));
    assert_eq!(result.classification, Classification::NoOp);
    assert_eq!(result.next_active, Some(6));
}
