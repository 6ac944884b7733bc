//! Catalog domain model for hub/grid browsing screens.
//!
//! # Responsibility
//! - Define groups and items with bindable display attributes.
//! - Keep each group's top-items window consistent with its item list.
//!
//! # Invariants
//! - Entity identifiers never change after construction.
//! - Items are shared handles; a group's window never copies item state.

pub mod entity;
pub mod group;
pub mod image;
pub mod item;
