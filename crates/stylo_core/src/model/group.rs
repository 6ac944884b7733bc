//! Catalog group model.
//!
//! # Responsibility
//! - Own the full ordered item list of one group.
//! - Keep the bounded top-items window in sync through the group's own
//!   mutation API, in the same call that mutates `Items`.
//! - Notify observers of `Items` edits, then of the matching `TopItems` edits.
//!
//! # Invariants
//! - `top_items() == items()[0 .. min(K, items().len())]` after every call.
//! - Out-of-range indices are rejected before anything is mutated.
//! - Every item added through this API carries this group's id as its
//!   back-reference; removed items keep theirs.

use crate::config::DEFAULT_TOP_ITEMS_WINDOW;
use crate::model::entity::CatalogEntity;
use crate::model::image::ImageResolver;
use crate::model::item::{ItemRef, ItemSnapshot};
use crate::notify::change::{CollectionChange, CollectionKind};
use crate::projection::list_change::ListChange;
use crate::projection::top_window::TopWindow;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::rc::Rc;

/// Errors from group mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Index does not address the item list in its current state.
    IndexOutOfBounds { index: usize, len: usize },
}

impl Display for GroupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "item index {index} out of bounds for {len} item(s)")
            }
        }
    }
}

impl Error for GroupError {}

/// Result type used by group mutation calls.
pub type GroupResult<T> = Result<T, GroupError>;

/// One browsable catalog group with its items and top-items window.
#[derive(Debug)]
pub struct CatalogGroup {
    entity: CatalogEntity,
    items: Vec<ItemRef>,
    top_items: TopWindow<ItemRef>,
}

impl CatalogGroup {
    /// Creates an empty group with the default window capacity.
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_capacity(unique_id, title, DEFAULT_TOP_ITEMS_WINDOW)
    }

    /// Creates an empty group with window capacity `capacity`.
    pub fn with_capacity(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        capacity: NonZeroUsize,
    ) -> Self {
        Self {
            entity: CatalogEntity::new(unique_id, title),
            items: Vec::new(),
            top_items: TopWindow::with_identity(capacity, Rc::ptr_eq),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.entity.init_subtitle(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.entity.init_description(description.into());
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.entity.init_image_path(path.into());
        self
    }

    pub fn entity(&self) -> &CatalogEntity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut CatalogEntity {
        &mut self.entity
    }

    pub fn unique_id(&self) -> &str {
        self.entity.unique_id()
    }

    pub fn title(&self) -> &str {
        self.entity.title()
    }

    /// Full ordered item list.
    pub fn items(&self) -> &[ItemRef] {
        &self.items
    }

    /// Bounded prefix of `items()`, read-only for callers.
    pub fn top_items(&self) -> &[ItemRef] {
        self.top_items.as_slice()
    }

    /// Window capacity `K`.
    pub fn top_items_capacity(&self) -> usize {
        self.top_items.capacity()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the position of the first item with `item_id`.
    pub fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.borrow().unique_id() == item_id)
    }

    /// Appends one item.
    pub fn push(&mut self, item: ItemRef) {
        self.adopt(&item);
        let index = self.items.len();
        self.items.push(item);
        self.apply(ListChange::Inserted { index });
    }

    /// Inserts one item at `index` (`index == len()` appends).
    pub fn insert(&mut self, index: usize, item: ItemRef) -> GroupResult<()> {
        self.ensure_index(index, self.items.len() + 1)?;
        self.adopt(&item);
        self.items.insert(index, item);
        self.apply(ListChange::Inserted { index });
        Ok(())
    }

    /// Moves the item at `from` so it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> GroupResult<()> {
        self.ensure_index(from, self.items.len())?;
        self.ensure_index(to, self.items.len())?;
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.apply(ListChange::Moved { from, to });
        Ok(())
    }

    /// Removes and returns the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> GroupResult<ItemRef> {
        self.ensure_index(index, self.items.len())?;
        let removed = self.items.remove(index);
        self.apply(ListChange::Removed { index });
        Ok(removed)
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn replace_at(&mut self, index: usize, item: ItemRef) -> GroupResult<ItemRef> {
        self.ensure_index(index, self.items.len())?;
        self.adopt(&item);
        let previous = std::mem::replace(&mut self.items[index], item);
        self.apply(ListChange::Replaced { index });
        Ok(previous)
    }

    /// Replaces the whole item list.
    pub fn reset(&mut self, items: Vec<ItemRef>) {
        for item in &items {
            self.adopt(item);
        }
        self.items = items;
        self.apply(ListChange::Reset);
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.reset(Vec::new());
    }

    /// Builds the read model with the top items only.
    pub fn snapshot(&mut self, resolver: &dyn ImageResolver) -> GroupSnapshot {
        let image = self
            .entity
            .image(resolver)
            .map(|image| image.uri().to_string());
        let top_items = self
            .top_items
            .iter()
            .map(|item| item.borrow_mut().snapshot(resolver))
            .collect();
        GroupSnapshot {
            unique_id: self.entity.unique_id().to_string(),
            title: self.entity.title().to_string(),
            subtitle: self.entity.subtitle().to_string(),
            description: self.entity.description().to_string(),
            image,
            item_count: self.items.len(),
            top_items,
        }
    }

    fn ensure_index(&self, index: usize, bound: usize) -> GroupResult<()> {
        if index < bound {
            Ok(())
        } else {
            Err(GroupError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Points `item`'s back-reference at this group, notifying only on change.
    fn adopt(&self, item: &ItemRef) {
        let group_id = self.entity.unique_id();
        if item.borrow().group_id() == group_id {
            return;
        }
        item.borrow_mut().set_group_id(group_id);
    }

    fn apply(&mut self, change: ListChange) {
        let edits = self.top_items.apply(change, &self.items);
        debug!(
            "event=items_changed module=group group_id={} action={} len={} top_len={} top_edits={}",
            self.entity.unique_id(),
            change.label(),
            self.items.len(),
            self.top_items.len(),
            edits.len()
        );

        let observers = self.entity.observers();
        if observers.is_empty() {
            return;
        }
        let group_id = self.entity.unique_id();
        observers.notify_collection(&CollectionChange {
            group_id: group_id.to_string(),
            collection: CollectionKind::Items,
            change,
        });
        for edit in edits {
            observers.notify_collection(&CollectionChange {
                group_id: group_id.to_string(),
                collection: CollectionKind::TopItems,
                change: edit,
            });
        }
    }
}

impl Display for CatalogGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.entity, f)
    }
}

/// Serializable group read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSnapshot {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: Option<String>,
    /// Length of the full item list.
    pub item_count: usize,
    /// Items currently in the top-items window.
    pub top_items: Vec<ItemSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::{CatalogGroup, GroupError};
    use crate::model::item::{CatalogItem, ItemRef};
    use std::rc::Rc;

    fn item(id: &str) -> ItemRef {
        CatalogItem::new(id, id).in_group("Group-T").into_ref()
    }

    fn ids(items: &[ItemRef]) -> Vec<String> {
        items
            .iter()
            .map(|item| item.borrow().unique_id().to_string())
            .collect()
    }

    #[test]
    fn window_shares_item_handles_with_full_list() {
        let mut group = CatalogGroup::new("Group-T", "Test");
        group.push(item("A0"));

        assert!(Rc::ptr_eq(&group.items()[0], &group.top_items()[0]));
        group.items()[0]
            .borrow_mut()
            .entity_mut()
            .set_title("renamed");
        assert_eq!(group.top_items()[0].borrow().title(), "renamed");
    }

    #[test]
    fn rejects_out_of_range_indices_without_mutating() {
        let mut group = CatalogGroup::new("Group-T", "Test");
        group.push(item("A0"));

        assert_eq!(
            group.insert(2, item("X")).expect_err("insert past end"),
            GroupError::IndexOutOfBounds { index: 2, len: 1 }
        );
        assert!(group.move_item(0, 1).is_err());
        assert!(group.remove_at(1).is_err());
        assert!(group.replace_at(5, item("X")).is_err());
        assert_eq!(ids(group.items()), vec!["A0"]);
        assert_eq!(ids(group.top_items()), vec!["A0"]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut group = CatalogGroup::new("Group-T", "Test");
        group.insert(0, item("A0")).expect("insert into empty group");
        group.insert(1, item("A1")).expect("append through insert");
        assert_eq!(ids(group.top_items()), vec!["A0", "A1"]);
    }

    #[test]
    fn added_items_take_this_group_as_back_reference() {
        let mut group = CatalogGroup::new("Group-T", "Test");
        group.push(CatalogItem::new("A0", "A0").into_ref());
        group
            .insert(0, CatalogItem::new("A1", "A1").in_group("Group-Old").into_ref())
            .expect("insert at front");
        group
            .replace_at(1, CatalogItem::new("A2", "A2").into_ref())
            .expect("replace existing");
        for item in group.items() {
            assert_eq!(item.borrow().group_id(), "Group-T");
        }

        group.reset(vec![CatalogItem::new("B0", "B0").in_group("Group-Old").into_ref()]);
        assert_eq!(group.items()[0].borrow().group_id(), "Group-T");
    }

    #[test]
    fn removed_item_keeps_its_back_reference() {
        let mut group = CatalogGroup::new("Group-T", "Test");
        group.push(item("A0"));
        let removed = group.remove_at(0).expect("remove only item");
        assert_eq!(removed.borrow().group_id(), "Group-T");
    }

    #[test]
    fn error_message_names_index_and_length() {
        let err = GroupError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "item index 4 out of bounds for 2 item(s)");
    }
}
