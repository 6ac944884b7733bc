//! Catalog item model.
//!
//! # Responsibility
//! - Extend the common entity with body content and a group back-reference.
//! - Provide a serializable read model for UI/FFI callers.
//!
//! # Invariants
//! - `group_id` names the owning group but does not keep it alive.
//! - Items are shared through `ItemRef` so a group's full list and its
//!   top-items window point at the same item.

use crate::model::entity::CatalogEntity;
use crate::model::image::ImageResolver;
use crate::notify::change::EntityProperty;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Shared, single-threaded handle to one item.
pub type ItemRef = Rc<RefCell<CatalogItem>>;

/// One browsable catalog entry.
#[derive(Debug)]
pub struct CatalogItem {
    entity: CatalogEntity,
    content: String,
    group_id: String,
}

impl CatalogItem {
    /// Creates an item with empty optional fields.
    ///
    /// Builder methods below fill the rest without emitting notifications,
    /// since nothing can observe the item yet.
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            entity: CatalogEntity::new(unique_id, title),
            content: String::new(),
            group_id: String::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.entity.init_subtitle(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.entity.init_description(description.into());
        self
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.entity.init_image_path(path.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the owning group back-reference.
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Wraps the item into a shareable handle.
    pub fn into_ref(self) -> ItemRef {
        Rc::new(RefCell::new(self))
    }

    pub fn entity(&self) -> &CatalogEntity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut CatalogEntity {
        &mut self.entity
    }

    pub fn unique_id(&self) -> &str {
        self.entity.unique_id()
    }

    pub fn title(&self) -> &str {
        self.entity.title()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        let old = std::mem::replace(&mut self.content, value.into());
        self.entity
            .notify_text(EntityProperty::Content, old, self.content.clone());
    }

    /// Identifier of the owning group; empty when detached.
    pub fn group_id(&self) -> &str {
        self.group_id.as_str()
    }

    pub fn set_group_id(&mut self, value: impl Into<String>) {
        let old = std::mem::replace(&mut self.group_id, value.into());
        self.entity
            .notify_text(EntityProperty::Group, old, self.group_id.clone());
    }

    /// Builds the read model, resolving the image if still pending.
    pub fn snapshot(&mut self, resolver: &dyn ImageResolver) -> ItemSnapshot {
        let image = self
            .entity
            .image(resolver)
            .map(|image| image.uri().to_string());
        ItemSnapshot {
            unique_id: self.entity.unique_id().to_string(),
            title: self.entity.title().to_string(),
            subtitle: self.entity.subtitle().to_string(),
            description: self.entity.description().to_string(),
            image,
            content: self.content.clone(),
            group_id: self.group_id.clone(),
        }
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.entity, f)
    }
}

/// Serializable item read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSnapshot {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Resolved image URI, `None` when the item has no image.
    pub image: Option<String>,
    pub content: String,
    pub group_id: String,
}
