//! Object operations (add, select, rotate, variants, cart) for designer state.

use roomkit_core::{Catalog, CatalogError, CatalogId, CatalogItem, NodeId, VariantOption};

use super::DesignerState;
use crate::commands::CommandOutcome;
use crate::geometry::Point;
use crate::object::ObjectId;

/// One placed object priced against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub object_id: ObjectId,
    pub catalog_id: CatalogId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl DesignerState {
    /// Places a new instance of a catalog item at the origin.
    pub fn add_item(&mut self, catalog: &Catalog, id: CatalogId) -> Result<ObjectId, CatalogError> {
        let item = catalog.require_item(id)?;
        let before = self.model_snapshot();
        let object_id = self.objects.add(item);
        self.commit(&format!("Add {}", item.name), before);
        tracing::debug!("Added {} as {}", item.name, object_id);
        Ok(object_id)
    }

    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let before = self.model_snapshot();
        if self.objects.remove(id).is_none() {
            tracing::debug!("Cannot remove unknown object {}", id);
            return false;
        }
        self.commit("Remove object", before)
    }

    pub fn remove_selected(&mut self) -> bool {
        match self.objects.selected_id() {
            Some(id) => self.remove_object(id),
            None => false,
        }
    }

    /// Selects an object. Returns whether the selection changed; selection
    /// alone is not an undoable edit.
    pub fn select_object(&mut self, id: ObjectId) -> bool {
        let previous = self.objects.selected_id();
        self.objects.select(id) && previous != Some(id)
    }

    pub fn deselect_all(&mut self) -> bool {
        let had_selection = self.objects.selected_id().is_some();
        self.objects.deselect_all();
        had_selection
    }

    /// Moves an object to a store-space position without snapping.
    pub fn move_object(&mut self, id: ObjectId, position: Point) -> bool {
        let before = self.model_snapshot();
        self.objects.move_to(id, position);
        self.commit("Move object", before)
    }

    pub fn rotate_object(&mut self, id: ObjectId, delta_degrees: f64) -> bool {
        let before = self.model_snapshot();
        self.objects.rotate(id, delta_degrees);
        self.commit("Rotate object", before)
    }

    /// Rotates the selected object by the configured step.
    pub fn rotate_selected(&mut self, clockwise: bool) -> bool {
        let Some(id) = self.objects.selected_id() else {
            return false;
        };
        let step = self.options.rotation_step_degrees;
        self.rotate_object(id, if clockwise { -step } else { step })
    }

    /// Replaces the selected object with another item of the same
    /// subcategory.
    pub fn swap_selected_variant(&mut self, catalog: &Catalog, id: CatalogId) -> CommandOutcome {
        let Some(selected) = self.objects.selected() else {
            return CommandOutcome::Rejected("No object selected".to_string());
        };
        let (object_id, current) = (selected.id, selected.catalog_id);
        if current == id {
            return CommandOutcome::Unchanged;
        }
        let Some(item) = catalog.sibling_items(current).iter().find(|i| i.id == id) else {
            return CommandOutcome::Rejected("Variant not found".to_string());
        };

        let before = self.model_snapshot();
        match self.objects.swap_variant(object_id, item) {
            Some(new_id) => {
                self.commit(&format!("Apply variant {}", item.name), before);
                tracing::debug!("Swapped {} for {} ({})", object_id, item.name, new_id);
                CommandOutcome::Applied
            }
            None => CommandOutcome::Unchanged,
        }
    }

    /// Width variants offered for the selected object.
    pub fn width_variant_options<'a>(&self, catalog: &'a Catalog) -> Vec<VariantOption<'a>> {
        self.objects
            .selected()
            .map(|o| catalog.width_variants_of(o.catalog_id))
            .unwrap_or_default()
    }

    /// Colour variants offered for the selected object.
    pub fn color_variant_options<'a>(&self, catalog: &'a Catalog) -> Vec<VariantOption<'a>> {
        self.objects
            .selected()
            .map(|o| catalog.color_variants_of(o.catalog_id))
            .unwrap_or_default()
    }

    /// Items the add picker lists for a subcategory.
    pub fn add_picker_items<'a>(
        &self,
        catalog: &'a Catalog,
        subcategory: &NodeId,
    ) -> Vec<&'a CatalogItem> {
        catalog.visible_items(subcategory)
    }

    /// Removes every object. The room is kept.
    pub fn clear_objects(&mut self) -> bool {
        if self.objects.is_empty() {
            return false;
        }
        let before = self.model_snapshot();
        self.objects.clear();
        self.commit("Clear objects", before)
    }

    /// Prices the layout. Items without a price count as zero.
    pub fn cart_summary(&self, catalog: &Catalog) -> CartSummary {
        let lines: Vec<CartLine> = self
            .objects
            .iter()
            .filter_map(|object| {
                let Some(item) = catalog.find_item(object.catalog_id) else {
                    tracing::warn!(
                        "Catalog item {} for object {} not found, leaving it out of the cart",
                        object.catalog_id,
                        object.id
                    );
                    return None;
                };
                Some(CartLine {
                    object_id: object.id,
                    catalog_id: item.id,
                    name: item.name.clone(),
                    price: item.price.unwrap_or(0.0),
                })
            })
            .collect();
        let total = lines.iter().map(|l| l.price).sum();
        CartSummary { lines, total }
    }
}
