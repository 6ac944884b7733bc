//! Catalog source context and seed content.
//!
//! # Responsibility
//! - Hold the ordered group list behind an explicit, constructed handle.
//! - Resolve identifiers to groups and items.
//!
//! # Invariants
//! - Group and item identifiers are expected to be unique; duplicates are
//!   reported at lookup time, never silently resolved.

pub mod catalog;
pub mod seed;
