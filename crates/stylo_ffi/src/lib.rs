//! Flutter-facing bindings for the Stylo catalog core.

pub mod api;
