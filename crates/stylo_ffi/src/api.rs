//! FFI use-case API for the Flutter catalog screens.
//!
//! # Responsibility
//! - Expose browse/read calls over the seeded catalog to Dart via FRB.
//! - Map core results into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The catalog is confined to the calling thread (FRB sync calls run on the
//!   UI isolate thread), so every call on that thread sees the same catalog.

use log::warn;
use std::cell::RefCell;
use stylo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CatalogOptions, CatalogSource, GroupSnapshot, ItemSnapshot,
};

thread_local! {
    static CATALOG: RefCell<Option<CatalogSource>> = const { RefCell::new(None) };
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Item card shown in hub sections and detail pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemCard {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Resolved image URI, empty when the item has no image.
    pub image_uri: String,
    pub content: String,
    pub group_id: String,
}

/// Group section with its top items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroupSection {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_uri: String,
    /// Length of the full item list.
    pub item_count: u32,
    pub top_items: Vec<CatalogItemCard>,
}

/// Response envelope for `catalog_groups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroupsResponse {
    pub ok: bool,
    pub groups: Vec<CatalogGroupSection>,
    pub message: String,
}

/// Response envelope for `catalog_group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroupResponse {
    pub ok: bool,
    /// `None` when the id is unknown or the lookup failed.
    pub group: Option<CatalogGroupSection>,
    pub message: String,
}

/// Response envelope for `catalog_item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemResponse {
    pub ok: bool,
    pub item: Option<CatalogItemCard>,
    pub message: String,
}

/// Generic action response envelope for catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    pub ok: bool,
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Lists every group with its top items.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_groups() -> CatalogGroupsResponse {
    let result = with_catalog(|source| {
        let resolver = source.resolver().clone();
        Ok(source
            .groups_mut()
            .iter_mut()
            .map(|group| to_group_section(group.snapshot(&resolver)))
            .collect::<Vec<_>>())
    });

    match result {
        Ok(groups) => {
            let message = format!("Loaded {} group(s).", groups.len());
            CatalogGroupsResponse {
                ok: true,
                groups,
                message,
            }
        }
        Err(err) => CatalogGroupsResponse {
            ok: false,
            groups: Vec::new(),
            message: format!("catalog_groups failed: {err}"),
        },
    }
}

/// Loads one group section by id.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Unknown ids return `ok=true` with `group=None`.
/// - Duplicate ids return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_group(group_id: String) -> CatalogGroupResponse {
    let group_id = group_id.trim().to_string();
    let result = with_catalog(|source| {
        let resolver = source.resolver().clone();
        let group = source
            .group_mut(group_id.as_str())
            .map_err(|err| err.to_string())?;
        Ok(group.map(|group| to_group_section(group.snapshot(&resolver))))
    });

    match result {
        Ok(Some(group)) => CatalogGroupResponse {
            ok: true,
            group: Some(group),
            message: "Group loaded.".to_string(),
        },
        Ok(None) => CatalogGroupResponse {
            ok: true,
            group: None,
            message: format!("Group not found: {group_id}"),
        },
        Err(err) => CatalogGroupResponse {
            ok: false,
            group: None,
            message: format!("catalog_group failed: {err}"),
        },
    }
}

/// Loads one item card by id.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Unknown ids return `ok=true` with `item=None`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_item(item_id: String) -> CatalogItemResponse {
    let item_id = item_id.trim().to_string();
    let result = with_catalog(|source| {
        let item = source
            .get_item(item_id.as_str())
            .map_err(|err| err.to_string())?;
        let snapshot = item.map(|handle| {
            let mut item = handle.borrow_mut();
            item.snapshot(source.resolver())
        });
        Ok(snapshot.map(to_item_card))
    });

    match result {
        Ok(Some(item)) => CatalogItemResponse {
            ok: true,
            item: Some(item),
            message: "Item loaded.".to_string(),
        },
        Ok(None) => CatalogItemResponse {
            ok: true,
            item: None,
            message: format!("Item not found: {item_id}"),
        },
        Err(err) => CatalogItemResponse {
            ok: false,
            item: None,
            message: format!("catalog_item failed: {err}"),
        },
    }
}

/// Moves one item inside its group; the group's top items follow.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Out-of-range indices fail without mutating the group.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_move_item(
    group_id: String,
    from_index: u32,
    to_index: u32,
) -> CatalogActionResponse {
    let group_id = group_id.trim().to_string();
    let result = with_catalog(|source| {
        let group = source
            .group_mut(group_id.as_str())
            .map_err(|err| err.to_string())?
            .ok_or_else(|| format!("group not found: {group_id}"))?;
        group
            .move_item(from_index as usize, to_index as usize)
            .map_err(|err| err.to_string())
    });

    match result {
        Ok(()) => CatalogActionResponse::success("Item moved."),
        Err(err) => {
            warn!(
                "event=ffi_move_failed module=ffi status=error group_id={}",
                group_id
            );
            CatalogActionResponse::failure(format!("catalog_move_item failed: {err}"))
        }
    }
}

/// Drops every in-memory change and reloads the sample catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_reload() -> CatalogActionResponse {
    match CatalogSource::seeded(CatalogOptions::default()) {
        Ok(source) => CATALOG.with(|cell| match cell.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = Some(source);
                CatalogActionResponse::success("Catalog reloaded.")
            }
            Err(_) => CatalogActionResponse::failure("catalog_reload failed: catalog is busy"),
        }),
        Err(err) => CatalogActionResponse::failure(format!("catalog_reload failed: {err}")),
    }
}

fn with_catalog<T>(
    f: impl FnOnce(&mut CatalogSource) -> Result<T, String>,
) -> Result<T, String> {
    CATALOG.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| "catalog is busy".to_string())?;
        if slot.is_none() {
            let source = CatalogSource::seeded(CatalogOptions::default())
                .map_err(|err| format!("catalog init failed: {err}"))?;
            *slot = Some(source);
        }
        let Some(source) = slot.as_mut() else {
            return Err("catalog unavailable".to_string());
        };
        f(source)
    })
}

fn to_group_section(snapshot: GroupSnapshot) -> CatalogGroupSection {
    CatalogGroupSection {
        unique_id: snapshot.unique_id,
        title: snapshot.title,
        subtitle: snapshot.subtitle,
        description: snapshot.description,
        image_uri: snapshot.image.unwrap_or_default(),
        item_count: u32::try_from(snapshot.item_count).unwrap_or(u32::MAX),
        top_items: snapshot.top_items.into_iter().map(to_item_card).collect(),
    }
}

fn to_item_card(snapshot: ItemSnapshot) -> CatalogItemCard {
    CatalogItemCard {
        unique_id: snapshot.unique_id,
        title: snapshot.title,
        subtitle: snapshot.subtitle,
        description: snapshot.description,
        image_uri: snapshot.image.unwrap_or_default(),
        content: snapshot.content,
        group_id: snapshot.group_id,
    }
}
