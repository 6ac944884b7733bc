//! Core catalog model for the Stylo hub browsing screens.
//! Groups, items, their bounded top-items windows and change notification
//! live here; UI and FFI layers only bind to what this crate exposes.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod projection;
pub mod source;

pub use config::{CatalogOptions, OptionsError, DEFAULT_ASSET_BASE, DEFAULT_TOP_ITEMS_CAPACITY};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::entity::CatalogEntity;
pub use model::group::{CatalogGroup, GroupError, GroupResult, GroupSnapshot};
pub use model::image::{BaseUriResolver, ImageResolver, ImageSlot, ImageSource};
pub use model::item::{CatalogItem, ItemRef, ItemSnapshot};
pub use notify::change::{
    CollectionChange, CollectionKind, EntityProperty, PropertyChange, PropertyValue,
};
pub use notify::{CatalogObserver, ObserverList, SubscriptionId};
pub use projection::list_change::ListChange;
pub use projection::top_window::{SameFn, TopWindow};
pub use source::catalog::{CatalogError, CatalogResult, CatalogSource, ALL_GROUPS_SELECTOR};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
