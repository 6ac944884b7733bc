//! Bounded top-N window over a source list.
//!
//! # Responsibility
//! - Mirror the first `K` elements of a source list.
//! - Patch the mirror per `ListChange` in O(1)-O(K) work.
//!
//! # Invariants
//! - `len() == min(K, source.len())` after every `apply`.
//! - Values are always read from the post-change source slice.
//! - Indices are never clamped. An inconsistent change sequence (out of order,
//!   duplicated) panics on the offending index, or in debug builds trips the
//!   prefix check that runs after every `apply`.

use crate::projection::list_change::ListChange;
use std::num::NonZeroUsize;

/// Identity test used to compare window slots with source elements.
pub type SameFn<T> = fn(&T, &T) -> bool;

/// Capacity-bounded prefix mirror of a source list.
#[derive(Debug, Clone)]
pub struct TopWindow<T> {
    capacity: NonZeroUsize,
    items: Vec<T>,
    same: SameFn<T>,
}

impl<T: Clone + PartialEq> TopWindow<T> {
    /// Creates an empty window with capacity `K`, comparing slots by value.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::with_identity(capacity, <T as PartialEq>::eq)
    }

    /// Creates a window already filled from `source`.
    pub fn from_source(capacity: NonZeroUsize, source: &[T]) -> Self {
        let mut window = Self::new(capacity);
        window.refill(source);
        window
    }
}

impl<T: Clone> TopWindow<T> {
    /// Creates an empty window that compares slots with `same`.
    ///
    /// Shared handles without `PartialEq` pass a pointer identity such as
    /// `Rc::ptr_eq`.
    pub fn with_identity(capacity: NonZeroUsize, same: SameFn<T>) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity.get() + 1),
            same,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Applies one source-list change to the window.
    ///
    /// `source` must be the list *after* `change` took effect. Returns the
    /// edits performed on the window itself, in order, so observers of the
    /// window can replay them.
    ///
    /// # Panics
    /// - When an index in `change` does not fit the window or source state.
    /// - In debug builds, when the window no longer equals
    ///   `source[0 .. min(K, source.len())]`, e.g. after a duplicated or
    ///   out-of-order change.
    pub fn apply(&mut self, change: ListChange, source: &[T]) -> Vec<ListChange> {
        let k = self.capacity.get();
        let mut edits = Vec::new();

        match change {
            ListChange::Inserted { index } => {
                if index < k {
                    self.items.insert(index, source[index].clone());
                    edits.push(ListChange::Inserted { index });
                    if self.items.len() > k {
                        self.items.truncate(k);
                        edits.push(ListChange::Removed { index: k });
                    }
                }
            }
            ListChange::Moved { from, to } => {
                if from < k && to < k {
                    let value = self.items.remove(from);
                    self.items.insert(to, value);
                    edits.push(ListChange::Moved { from, to });
                } else if from < k {
                    // Leaves the window: the new boundary element slides in.
                    self.items.remove(from);
                    edits.push(ListChange::Removed { index: from });
                    self.items.push(source[k - 1].clone());
                    edits.push(ListChange::Inserted { index: k - 1 });
                } else if to < k {
                    self.items.insert(to, source[to].clone());
                    edits.push(ListChange::Inserted { index: to });
                    self.items.remove(k);
                    edits.push(ListChange::Removed { index: k });
                }
            }
            ListChange::Removed { index } => {
                if index < k {
                    self.items.remove(index);
                    edits.push(ListChange::Removed { index });
                    if source.len() >= k {
                        self.items.push(source[k - 1].clone());
                        edits.push(ListChange::Inserted { index: k - 1 });
                    }
                }
            }
            ListChange::Replaced { index } => {
                if index < k {
                    self.items[index] = source[index].clone();
                    edits.push(ListChange::Replaced { index });
                }
            }
            ListChange::Reset => {
                self.refill(source);
                edits.push(ListChange::Reset);
            }
        }

        debug_assert_eq!(
            self.items.len(),
            source.len().min(k),
            "top window out of sync after {change:?}"
        );
        debug_assert!(
            self.mirrors(source),
            "top window diverged from source prefix after {change:?}"
        );
        edits
    }

    fn refill(&mut self, source: &[T]) {
        self.items.clear();
        self.items
            .extend(source.iter().take(self.capacity.get()).cloned());
    }

    /// Returns whether the window equals the bounded prefix of `source`.
    pub fn mirrors(&self, source: &[T]) -> bool {
        let end = source.len().min(self.capacity.get());
        self.items.len() == end
            && self
                .items
                .iter()
                .zip(source)
                .all(|(slot, value)| (self.same)(slot, value))
    }
}
