//! Change records delivered to `CatalogObserver`s.

use crate::model::image::ImageSlot;
use crate::projection::list_change::ListChange;

/// Bindable attribute of a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityProperty {
    Title,
    Subtitle,
    Description,
    Image,
    /// Item body text.
    Content,
    /// Item back-reference to its owning group.
    Group,
}

impl EntityProperty {
    /// Stable attribute name, matching the UI binding names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Subtitle => "Subtitle",
            Self::Description => "Description",
            Self::Image => "Image",
            Self::Content => "Content",
            Self::Group => "Group",
        }
    }
}

/// Typed attribute value carried by a `PropertyChange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Image(ImageSlot),
}

/// One attribute write on one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub entity_id: String,
    pub property: EntityProperty,
    pub old_value: PropertyValue,
    pub new_value: PropertyValue,
}

/// Which of a group's sequences changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Items,
    TopItems,
}

/// One edit of a group's `Items` or `TopItems` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionChange {
    pub group_id: String,
    pub collection: CollectionKind,
    pub change: ListChange,
}
