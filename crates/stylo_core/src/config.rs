//! Catalog tuning options.
//!
//! # Responsibility
//! - Hold the few knobs the catalog model exposes (window size, asset base).
//! - Validate them once, before any group is built.
//!
//! # Invariants
//! - `top_items_capacity` is at least 1, so `Items[K-1]` is addressable.
//! - `asset_base` is never blank.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// Default number of items mirrored into a group's top-items window.
///
/// Twelve fills grid columns evenly for 1, 2, 3, 4 or 6 rows.
pub const DEFAULT_TOP_ITEMS_CAPACITY: usize = 12;

/// `DEFAULT_TOP_ITEMS_CAPACITY` as a window size.
pub const DEFAULT_TOP_ITEMS_WINDOW: NonZeroUsize =
    match NonZeroUsize::new(DEFAULT_TOP_ITEMS_CAPACITY) {
        Some(capacity) => capacity,
        None => panic!("default top items capacity must be non-zero"),
    };

/// Default base location relative image paths are resolved against.
pub const DEFAULT_ASSET_BASE: &str = "ms-appx:///";

/// Options shared by every group built from one catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Window capacity `K` for `CatalogGroup::top_items`.
    pub top_items_capacity: usize,
    /// Base location for `BaseUriResolver`.
    pub asset_base: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            top_items_capacity: DEFAULT_TOP_ITEMS_CAPACITY,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl CatalogOptions {
    /// Returns default options with a custom window capacity.
    pub fn with_capacity(top_items_capacity: usize) -> Self {
        Self {
            top_items_capacity,
            ..Self::default()
        }
    }

    /// Validates option invariants.
    ///
    /// # Errors
    /// - `ZeroCapacity` when `top_items_capacity == 0`.
    /// - `BlankAssetBase` when `asset_base` is empty after trim.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.top_items_window()?;
        if self.asset_base.trim().is_empty() {
            return Err(OptionsError::BlankAssetBase);
        }
        Ok(())
    }

    /// Returns the window capacity as a non-zero size.
    pub fn top_items_window(&self) -> Result<NonZeroUsize, OptionsError> {
        NonZeroUsize::new(self.top_items_capacity).ok_or(OptionsError::ZeroCapacity)
    }
}

/// Option validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    ZeroCapacity,
    BlankAssetBase,
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "top items capacity must be at least 1"),
            Self::BlankAssetBase => write!(f, "asset base must not be blank"),
        }
    }
}

impl Error for OptionsError {}

#[cfg(test)]
mod tests {
    use super::{
        CatalogOptions, OptionsError, DEFAULT_TOP_ITEMS_CAPACITY, DEFAULT_TOP_ITEMS_WINDOW,
    };

    #[test]
    fn defaults_are_valid() {
        let options = CatalogOptions::default();
        assert_eq!(options.top_items_capacity, DEFAULT_TOP_ITEMS_CAPACITY);
        options.validate().expect("default options should validate");
        assert_eq!(
            options.top_items_window().expect("default window"),
            DEFAULT_TOP_ITEMS_WINDOW
        );
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = CatalogOptions::with_capacity(0)
            .validate()
            .expect_err("zero capacity must fail");
        assert_eq!(err, OptionsError::ZeroCapacity);
    }

    #[test]
    fn rejects_blank_asset_base() {
        let options = CatalogOptions {
            asset_base: "   ".to_string(),
            ..CatalogOptions::default()
        };
        assert_eq!(
            options.validate().expect_err("blank base must fail"),
            OptionsError::BlankAssetBase
        );
    }
}
