//! Collection of placed objects with copy-on-write snapshots.
//!
//! At most one object is selected at any time. Every id-based operation
//! treats an unknown id as a no-op and reports it through its return value.

use std::sync::Arc;

use roomkit_core::CatalogItem;

use crate::geometry::Point;
use crate::object::{ObjectId, PlacedObject};
use crate::view::ViewLayer;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectStore {
    objects: Arc<Vec<PlacedObject>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable view of the collection at this instant.
    pub fn snapshot(&self) -> Arc<Vec<PlacedObject>> {
        Arc::clone(&self.objects)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn selected(&self) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.selected)
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected().map(|o| o.id)
    }

    fn write(&mut self) -> &mut Vec<PlacedObject> {
        Arc::make_mut(&mut self.objects)
    }

    fn update(&mut self, id: ObjectId, f: impl FnOnce(&mut PlacedObject)) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            tracing::debug!("Object {} not found", id);
            return false;
        };
        f(&mut self.write()[index]);
        true
    }

    /// Places a new instance of `item` at the origin.
    pub fn add(&mut self, item: &CatalogItem) -> ObjectId {
        let object = PlacedObject::from_item(item);
        let id = object.id;
        self.write().push(object);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<PlacedObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.write().remove(index))
    }

    /// Selects `id` and deselects everything else. Unknown ids leave the
    /// current selection untouched.
    pub fn select(&mut self, id: ObjectId) -> bool {
        if !self.contains(id) {
            tracing::debug!("Cannot select unknown object {}", id);
            return false;
        }
        if self.selected_id() == Some(id) {
            return true;
        }
        for o in self.write().iter_mut() {
            o.selected = o.id == id;
        }
        true
    }

    pub fn deselect_all(&mut self) {
        if self.selected().is_none() {
            return;
        }
        self.write().iter_mut().for_each(|o| o.selected = false);
    }

    /// Moves an object. The position is stored exactly as given.
    pub fn move_to(&mut self, id: ObjectId, position: Point) -> bool {
        if !position.is_finite() {
            return false;
        }
        self.update(id, |o| o.position = position)
    }

    pub fn rotate(&mut self, id: ObjectId, delta_degrees: f64) -> bool {
        if !delta_degrees.is_finite() {
            return false;
        }
        self.update(id, |o| o.rotation_degrees += delta_degrees)
    }

    /// Replaces an object with an instance of another catalog item, keeping
    /// position, rotation and selection. The replacement gets a new id,
    /// which is returned, and goes on top like a freshly added object.
    pub fn swap_variant(&mut self, id: ObjectId, item: &CatalogItem) -> Option<ObjectId> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let objects = self.write();
        let old = objects.remove(index);
        let replacement = PlacedObject {
            position: old.position,
            rotation_degrees: old.rotation_degrees,
            selected: old.selected,
            ..PlacedObject::from_item(item)
        };
        let new_id = replacement.id;
        objects.push(replacement);
        Some(new_id)
    }

    /// Replaces the whole collection. At most the last selected object of
    /// `objects` stays selected.
    pub fn replace_all(&mut self, mut objects: Vec<PlacedObject>) {
        let last_selected = objects.iter().rposition(|o| o.selected);
        for (i, o) in objects.iter_mut().enumerate() {
            o.selected = Some(i) == last_selected;
        }
        self.objects = Arc::new(objects);
    }

    pub fn clear(&mut self) {
        self.objects = Arc::new(Vec::new());
    }

    pub fn objects_in_layer(&self, layer: ViewLayer) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter().filter(move |o| o.layer() == layer)
    }

    /// Topmost object in `layer` whose footprint contains `point`.
    pub fn object_at(&self, point: Point, layer: ViewLayer) -> Option<&PlacedObject> {
        self.objects
            .iter()
            .rev()
            .filter(|o| o.layer() == layer)
            .find(|o| o.contains_point(point))
    }
}
