//! Attributes shared by catalog groups and items.
//!
//! # Responsibility
//! - Own identity, display strings, image slot and observers of one entity.
//! - Emit a `PropertyChange` for every attribute write.
//!
//! # Invariants
//! - `unique_id` is assigned at construction and never changes.
//! - Setting an explicit image drops any pending path, and vice versa.

use crate::model::image::{ImageResolver, ImageSlot, ImageSource};
use crate::notify::change::{EntityProperty, PropertyChange, PropertyValue};
use crate::notify::{CatalogObserver, ObserverList, SubscriptionId};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Common catalog entity state.
#[derive(Debug)]
pub struct CatalogEntity {
    unique_id: String,
    title: String,
    subtitle: String,
    description: String,
    image: ImageSlot,
    observers: ObserverList,
}

impl CatalogEntity {
    /// Creates an entity with empty display strings and no image.
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            image: ImageSlot::Empty,
            observers: ObserverList::new(),
        }
    }

    pub fn unique_id(&self) -> &str {
        self.unique_id.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn subtitle(&self) -> &str {
        self.subtitle.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        let old = std::mem::replace(&mut self.title, value.into());
        self.notify_text(EntityProperty::Title, old, self.title.clone());
    }

    pub fn set_subtitle(&mut self, value: impl Into<String>) {
        let old = std::mem::replace(&mut self.subtitle, value.into());
        self.notify_text(EntityProperty::Subtitle, old, self.subtitle.clone());
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        let old = std::mem::replace(&mut self.description, value.into());
        self.notify_text(EntityProperty::Description, old, self.description.clone());
    }

    /// Returns the image, resolving and caching a pending path on first read.
    pub fn image(&mut self, resolver: &dyn ImageResolver) -> Option<&ImageSource> {
        self.image.resolve_with(resolver)
    }

    /// Current image state without resolving anything.
    pub fn image_slot(&self) -> &ImageSlot {
        &self.image
    }

    /// Makes an explicit image authoritative.
    pub fn set_image(&mut self, image: ImageSource) {
        self.replace_image(ImageSlot::Resolved(image));
    }

    /// Makes a relative path authoritative; it resolves on the next read.
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.replace_image(ImageSlot::from_path(path));
    }

    pub fn subscribe(&mut self, observer: Rc<dyn CatalogObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub(crate) fn observers(&self) -> &ObserverList {
        &self.observers
    }

    pub(crate) fn init_subtitle(&mut self, value: String) {
        self.subtitle = value;
    }

    pub(crate) fn init_description(&mut self, value: String) {
        self.description = value;
    }

    pub(crate) fn init_image_path(&mut self, path: String) {
        self.image = ImageSlot::from_path(path);
    }

    pub(crate) fn notify_text(&self, property: EntityProperty, old: String, new: String) {
        self.notify(property, PropertyValue::Text(old), PropertyValue::Text(new));
    }

    fn replace_image(&mut self, slot: ImageSlot) {
        let old = std::mem::replace(&mut self.image, slot);
        self.notify(
            EntityProperty::Image,
            PropertyValue::Image(old),
            PropertyValue::Image(self.image.clone()),
        );
    }

    fn notify(&self, property: EntityProperty, old_value: PropertyValue, new_value: PropertyValue) {
        if self.observers.is_empty() {
            return;
        }
        self.observers.notify_property(&PropertyChange {
            entity_id: self.unique_id.clone(),
            property,
            old_value,
            new_value,
        });
    }
}

impl Display for CatalogEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogEntity;
    use crate::model::image::{BaseUriResolver, ImageSlot, ImageSource};
    use crate::notify::change::{EntityProperty, PropertyChange, PropertyValue};
    use crate::notify::CatalogObserver;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        changes: RefCell<Vec<PropertyChange>>,
    }

    impl CatalogObserver for Recorder {
        fn property_changed(&self, change: &PropertyChange) {
            self.changes.borrow_mut().push(change.clone());
        }
    }

    #[test]
    fn setters_notify_with_old_and_new_values() {
        let recorder = Rc::new(Recorder::default());
        let mut entity = CatalogEntity::new("Group-1", "Dress Shirt Styles");
        entity.subscribe(recorder.clone());

        entity.set_title("Shirts");
        entity.set_subtitle("Group Subtitle: 1");

        let changes = recorder.changes.borrow();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].entity_id, "Group-1");
        assert_eq!(changes[0].property, EntityProperty::Title);
        assert_eq!(
            changes[0].old_value,
            PropertyValue::Text("Dress Shirt Styles".to_string())
        );
        assert_eq!(changes[0].new_value, PropertyValue::Text("Shirts".to_string()));
        assert_eq!(changes[1].property, EntityProperty::Subtitle);
    }

    #[test]
    fn same_value_write_still_notifies() {
        let recorder = Rc::new(Recorder::default());
        let mut entity = CatalogEntity::new("Group-1", "Title");
        entity.subscribe(recorder.clone());

        entity.set_description("");
        entity.set_description("");

        assert_eq!(recorder.changes.borrow().len(), 2);
    }

    #[test]
    fn image_read_does_not_notify() {
        let recorder = Rc::new(Recorder::default());
        let mut entity = CatalogEntity::new("Group-1", "Title");
        entity.init_image_path("Assets/DarkGray.png".to_string());
        entity.subscribe(recorder.clone());

        let uri = entity
            .image(&BaseUriResolver::default())
            .map(|image| image.uri().to_string());

        assert_eq!(uri.as_deref(), Some("ms-appx:///Assets/DarkGray.png"));
        assert!(recorder.changes.borrow().is_empty());
    }

    #[test]
    fn image_value_and_path_are_mutually_exclusive() {
        let recorder = Rc::new(Recorder::default());
        let mut entity = CatalogEntity::new("Group-1", "Title");
        entity.subscribe(recorder.clone());

        entity.set_image(ImageSource::new("memory://swatch"));
        assert_eq!(entity.image_slot().pending_path(), None);

        entity.set_image_path("Assets/LightGray.png");
        assert_eq!(entity.image_slot().resolved(), None);
        assert_eq!(
            entity.image_slot().pending_path(),
            Some("Assets/LightGray.png")
        );

        let changes = recorder.changes.borrow();
        assert_eq!(changes.len(), 2);
        assert!(changes
            .iter()
            .all(|change| change.property == EntityProperty::Image));
        assert_eq!(
            changes[1].old_value,
            PropertyValue::Image(ImageSlot::Resolved(ImageSource::new("memory://swatch")))
        );
    }

    #[test]
    fn display_uses_title() {
        let entity = CatalogEntity::new("Group-2", "t-Shirt Styles");
        assert_eq!(entity.to_string(), "t-Shirt Styles");
    }
}
