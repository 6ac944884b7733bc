//! Lazy image references for catalog entities.
//!
//! # Responsibility
//! - Hold either a pending relative path or a resolved image value.
//! - Resolve a pending path once, on first read, and cache the result.
//!
//! # Invariants
//! - Exactly one of {pending path, resolved image} is authoritative.
//! - Resolution never emits change notifications.

use crate::config::DEFAULT_ASSET_BASE;
use serde::Serialize;

/// Resolved image value handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    uri: String,
}

impl ImageSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        self.uri.as_str()
    }
}

/// Turns a stored relative path into an image value.
pub trait ImageResolver {
    fn resolve(&self, path: &str) -> ImageSource;
}

/// Resolves paths by joining them onto a fixed base location.
///
/// Paths that already carry a scheme (`scheme://...`) are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUriResolver {
    base: String,
}

impl BaseUriResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }
}

impl Default for BaseUriResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl ImageResolver for BaseUriResolver {
    fn resolve(&self, path: &str) -> ImageSource {
        if path.contains("://") {
            return ImageSource::new(path);
        }
        let relative = path.trim_start_matches('/');
        if self.base.ends_with('/') {
            ImageSource::new(format!("{}{relative}", self.base))
        } else {
            ImageSource::new(format!("{}/{relative}", self.base))
        }
    }
}

/// Image state of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSlot {
    /// No image assigned.
    #[default]
    Empty,
    /// Relative path waiting for first read.
    Pending(String),
    /// Explicitly set or previously resolved image.
    Resolved(ImageSource),
}

impl ImageSlot {
    /// Builds a pending slot, or `Empty` for a blank path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.trim().is_empty() {
            Self::Empty
        } else {
            Self::Pending(path)
        }
    }

    /// Resolves a pending path once and returns the cached image.
    pub fn resolve_with(&mut self, resolver: &dyn ImageResolver) -> Option<&ImageSource> {
        if let Self::Pending(path) = self {
            let image = resolver.resolve(path);
            *self = Self::Resolved(image);
        }
        self.resolved()
    }

    /// Returns the image only if it is already resolved.
    pub fn resolved(&self) -> Option<&ImageSource> {
        match self {
            Self::Resolved(image) => Some(image),
            _ => None,
        }
    }

    pub fn pending_path(&self) -> Option<&str> {
        match self {
            Self::Pending(path) => Some(path.as_str()),
            _ => None,
        }
    }
}
