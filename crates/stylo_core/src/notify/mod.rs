//! Change notification contracts for UI binding layers.
//!
//! # Responsibility
//! - Define the observer interface and the change records it receives.
//! - Keep subscription bookkeeping out of entity code.
//!
//! # Invariants
//! - Notifications fire synchronously, after the value has been updated.
//! - Writes always notify, even when the new value equals the old one.
//! - Reads never notify.
//! - Observers must not re-borrow the entity being mutated from a callback.

pub mod change;

use crate::notify::change::{CollectionChange, PropertyChange};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use uuid::Uuid;

/// Identifier returned by `ObserverList::subscribe`.
pub type SubscriptionId = Uuid;

/// Receiver of catalog change records.
///
/// Both callbacks default to no-ops so observers only implement what they bind.
pub trait CatalogObserver {
    fn property_changed(&self, _change: &PropertyChange) {}

    fn collection_changed(&self, _change: &CollectionChange) {}
}

/// Ordered set of observers attached to one entity.
#[derive(Default)]
pub struct ObserverList {
    entries: Vec<(SubscriptionId, Rc<dyn CatalogObserver>)>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer; callbacks run in subscription order.
    pub fn subscribe(&mut self, observer: Rc<dyn CatalogObserver>) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.entries.push((id, observer));
        id
    }

    /// Removes one subscription. Returns `false` when `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify_property(&self, change: &PropertyChange) {
        for (_, observer) in &self.entries {
            observer.property_changed(change);
        }
    }

    pub fn notify_collection(&self, change: &CollectionChange) {
        for (_, observer) in &self.entries {
            observer.collection_changed(change);
        }
    }
}

impl Debug for ObserverList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.entries.len())
            .finish()
    }
}
