//! In-memory catalog source with identifier lookups.

use crate::config::{CatalogOptions, OptionsError};
use crate::model::group::CatalogGroup;
use crate::model::image::BaseUriResolver;
use crate::model::item::ItemRef;
use crate::source::seed;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::rc::Rc;

/// The only selector accepted by `CatalogSource::get_groups`.
pub const ALL_GROUPS_SELECTOR: &str = "AllGroups";

/// Errors from catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// `get_groups` was called with something other than `AllGroups`.
    InvalidSelector(String),
    /// More than one group shares this identifier.
    DuplicateGroupId(String),
    /// More than one item shares this identifier.
    DuplicateItemId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSelector(value) => write!(
                f,
                "only '{ALL_GROUPS_SELECTOR}' is supported as a collection of groups, got '{value}'"
            ),
            Self::DuplicateGroupId(id) => write!(f, "group id is not unique: {id}"),
            Self::DuplicateItemId(id) => write!(f, "item id is not unique: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Result type used by catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Explicit catalog context passed to whatever needs catalog access.
#[derive(Debug)]
pub struct CatalogSource {
    options: CatalogOptions,
    window: NonZeroUsize,
    resolver: BaseUriResolver,
    groups: Vec<CatalogGroup>,
}

impl CatalogSource {
    /// Creates an empty catalog after validating `options`.
    pub fn new(options: CatalogOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let window = options.top_items_window()?;
        let resolver = BaseUriResolver::new(options.asset_base.clone());
        Ok(Self {
            options,
            window,
            resolver,
            groups: Vec::new(),
        })
    }

    /// Creates a catalog populated with the sample fashion content.
    pub fn seeded(options: CatalogOptions) -> Result<Self, OptionsError> {
        let mut source = Self::new(options)?;
        seed::populate(&mut source);
        info!(
            "event=catalog_seeded module=source status=ok groups={} items={}",
            source.groups.len(),
            source.item_count()
        );
        Ok(source)
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Resolver for entity images, rooted at `options().asset_base`.
    pub fn resolver(&self) -> &BaseUriResolver {
        &self.resolver
    }

    /// Creates a detached group using this catalog's window capacity.
    pub fn new_group(
        &self,
        unique_id: impl Into<String>,
        title: impl Into<String>,
    ) -> CatalogGroup {
        CatalogGroup::with_capacity(unique_id, title, self.window)
    }

    /// Appends one group. Identifier uniqueness is not checked here.
    pub fn add_group(&mut self, group: CatalogGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    /// Mutable access to every group, in catalog order.
    pub fn groups_mut(&mut self) -> &mut [CatalogGroup] {
        &mut self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(CatalogGroup::len).sum()
    }

    /// Returns every group for the `AllGroups` selector.
    ///
    /// # Errors
    /// - `InvalidSelector` for any other selector value.
    pub fn get_groups(&self, selector: &str) -> CatalogResult<&[CatalogGroup]> {
        if selector != ALL_GROUPS_SELECTOR {
            return Err(CatalogError::InvalidSelector(selector.to_string()));
        }
        Ok(&self.groups)
    }

    /// Finds the group with `unique_id`.
    ///
    /// Returns `Ok(None)` when no group matches.
    ///
    /// # Errors
    /// - `DuplicateGroupId` when more than one group matches.
    pub fn get_group(&self, unique_id: &str) -> CatalogResult<Option<&CatalogGroup>> {
        let index = self.unique_group_index(unique_id)?;
        Ok(index.map(|index| &self.groups[index]))
    }

    /// Mutable variant of `get_group`, with the same uniqueness policy.
    pub fn group_mut(&mut self, unique_id: &str) -> CatalogResult<Option<&mut CatalogGroup>> {
        let index = self.unique_group_index(unique_id)?;
        Ok(index.map(|index| &mut self.groups[index]))
    }

    /// Finds the item with `unique_id` across all groups.
    ///
    /// Returns `Ok(None)` when no item matches.
    ///
    /// # Errors
    /// - `DuplicateItemId` when more than one item matches.
    pub fn get_item(&self, unique_id: &str) -> CatalogResult<Option<ItemRef>> {
        let mut found: Option<&ItemRef> = None;
        let candidates = self.groups.iter().flat_map(|group| group.items());
        for item in candidates {
            if item.borrow().unique_id() != unique_id {
                continue;
            }
            if found.is_some() {
                warn!(
                    "event=lookup_integrity module=source status=error kind=item id={}",
                    unique_id
                );
                return Err(CatalogError::DuplicateItemId(unique_id.to_string()));
            }
            found = Some(item);
        }
        Ok(found.map(Rc::clone))
    }

    fn unique_group_index(&self, unique_id: &str) -> CatalogResult<Option<usize>> {
        let mut matches = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.unique_id() == unique_id)
            .map(|(index, _)| index);
        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            warn!(
                "event=lookup_integrity module=source status=error kind=group id={}",
                unique_id
            );
            return Err(CatalogError::DuplicateGroupId(unique_id.to_string()));
        }
        Ok(first)
    }
}
