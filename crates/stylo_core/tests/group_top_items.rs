use std::cell::RefCell;
use std::rc::Rc;
use stylo_core::{
    CatalogGroup, CatalogItem, CatalogObserver, CollectionChange, CollectionKind, ItemRef,
    ListChange,
};

fn item(id: &str) -> ItemRef {
    CatalogItem::new(id, format!("Title {id}"))
        .in_group("Group-T")
        .into_ref()
}

fn group_with(count: usize) -> CatalogGroup {
    let mut group = CatalogGroup::new("Group-T", "Test group");
    for index in 0..count {
        group.push(item(&format!("A{index}")));
    }
    group
}

fn ids(items: &[ItemRef]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.borrow().unique_id().to_string())
        .collect()
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn assert_window_mirrors_items(group: &CatalogGroup) {
    let end = group.len().min(12);
    assert_eq!(group.top_items().len(), end);
    for (top, full) in group.top_items().iter().zip(&group.items()[..end]) {
        assert!(Rc::ptr_eq(top, full), "window must share item handles");
    }
}

#[derive(Default)]
struct CollectionRecorder {
    changes: RefCell<Vec<CollectionChange>>,
}

impl CatalogObserver for CollectionRecorder {
    fn collection_changed(&self, change: &CollectionChange) {
        self.changes.borrow_mut().push(change.clone());
    }
}

#[test]
fn insert_at_front_of_full_window_pushes_last_out() {
    let mut group = group_with(12);

    group.insert(0, item("X")).expect("insert at front");

    let mut want = names(&["X"]);
    want.extend((0..11).map(|index| format!("A{index}")));
    assert_eq!(ids(group.top_items()), want);
    assert_eq!(group.items()[12].borrow().unique_id(), "A11");
    assert_window_mirrors_items(&group);
}

#[test]
fn insert_at_boundary_keeps_window() {
    let mut group = group_with(12);
    let before = ids(group.top_items());

    group.insert(12, item("X")).expect("insert at boundary");

    assert_eq!(ids(group.top_items()), before);
    assert_eq!(group.len(), 13);
}

#[test]
fn move_out_of_window_backfills_new_boundary_element() {
    let mut group = group_with(13);

    group.move_item(5, 12).expect("move out of window");

    assert_eq!(
        ids(group.top_items()),
        names(&["A0", "A1", "A2", "A3", "A4", "A6", "A7", "A8", "A9", "A10", "A11", "A12"])
    );
    assert_eq!(group.items()[12].borrow().unique_id(), "A5");
    assert_window_mirrors_items(&group);
}

#[test]
fn remove_inside_window_appends_new_boundary_element() {
    let mut group = group_with(13);

    let removed = group.remove_at(3).expect("remove inside window");

    assert_eq!(removed.borrow().unique_id(), "A3");
    assert_eq!(group.top_items().len(), 12);
    assert_eq!(group.top_items()[11].borrow().unique_id(), "A12");
    assert_window_mirrors_items(&group);
}

#[test]
fn remove_from_exactly_twelve_shrinks_window() {
    let mut group = group_with(12);

    group.remove_at(0).expect("remove first");

    assert_eq!(group.top_items().len(), 11);
    assert_window_mirrors_items(&group);
}

#[test]
fn replace_only_touches_window_inside_boundary() {
    let mut group = group_with(20);

    group.replace_at(2, item("R2")).expect("replace inside window");
    assert_eq!(group.top_items()[2].borrow().unique_id(), "R2");

    let before = ids(group.top_items());
    let previous = group.replace_at(15, item("R15")).expect("replace outside");
    assert_eq!(previous.borrow().unique_id(), "A15");
    assert_eq!(ids(group.top_items()), before);
    assert_window_mirrors_items(&group);
}

#[test]
fn reset_twice_matches_reset_once() {
    let mut group = group_with(3);
    let replacement: Vec<ItemRef> = (0..15).map(|index| item(&format!("B{index}"))).collect();

    group.reset(replacement.clone());
    let once = ids(group.top_items());
    group.reset(replacement);

    assert_eq!(ids(group.top_items()), once);
    assert_eq!(once.len(), 12);
    assert_window_mirrors_items(&group);

    group.clear();
    assert!(group.top_items().is_empty());
    assert!(group.is_empty());
}

#[test]
fn observers_see_items_edit_then_window_edits() {
    let recorder = Rc::new(CollectionRecorder::default());
    let mut group = group_with(12);
    group.entity_mut().subscribe(recorder.clone());

    group.insert(0, item("X")).expect("insert at front");
    group.push(item("Y"));

    let changes = recorder.changes.borrow();
    let seen: Vec<(CollectionKind, ListChange)> = changes
        .iter()
        .map(|change| (change.collection, change.change))
        .collect();
    assert_eq!(
        seen,
        vec![
            (CollectionKind::Items, ListChange::Inserted { index: 0 }),
            (CollectionKind::TopItems, ListChange::Inserted { index: 0 }),
            (CollectionKind::TopItems, ListChange::Removed { index: 12 }),
            (CollectionKind::Items, ListChange::Inserted { index: 13 }),
        ]
    );
    assert!(changes.iter().all(|change| change.group_id == "Group-T"));
}

#[test]
fn mixed_mutations_keep_window_consistent() {
    let mut group = group_with(5);
    for index in 5..30 {
        group.insert(index / 2, item(&format!("N{index}"))).expect("insert");
        assert_window_mirrors_items(&group);
    }
    group.move_item(0, 25).expect("move out");
    assert_window_mirrors_items(&group);
    group.move_item(28, 1).expect("move in");
    assert_window_mirrors_items(&group);
    group.move_item(3, 7).expect("move within");
    assert_window_mirrors_items(&group);
    while group.len() > 8 {
        group.remove_at(group.len() / 3).expect("remove");
        assert_window_mirrors_items(&group);
    }
    group.replace_at(0, item("Z")).expect("replace");
    assert_window_mirrors_items(&group);
}

#[test]
fn custom_capacity_group_generalizes_boundary() {
    let capacity = std::num::NonZeroUsize::new(4).expect("non-zero");
    let mut group = CatalogGroup::with_capacity("Group-S", "Small", capacity);
    for index in 0..6 {
        group.push(item(&format!("A{index}")));
    }

    group.move_item(1, 5).expect("move out of small window");

    assert_eq!(ids(group.top_items()), names(&["A0", "A2", "A3", "A4"]));
    assert_eq!(group.top_items_capacity(), 4);
}
