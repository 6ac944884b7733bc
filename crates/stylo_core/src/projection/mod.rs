//! Incrementally maintained list projections.
//!
//! # Responsibility
//! - Describe single-step list mutations as index-based change records.
//! - Keep a bounded prefix window in sync with its source list without
//!   rescanning the whole list on every change.
//!
//! # Invariants
//! - After every applied change, the window equals
//!   `source[0 .. min(K, source.len()))` in the same order.
//! - The boundary element used for backfill is always `source[K-1]`.

pub mod list_change;
pub mod top_window;
