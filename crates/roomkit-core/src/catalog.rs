//! Product catalog data model.
//!
//! The catalog is owned by an external service; the layout engine only reads
//! it. Documents are organised as `sections → categories → subcategories →
//! items`, where sections reference categories by id. Field names of the
//! service's JSON are accepted alongside the snake_case names used here.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Error, Result};

/// Identifier of a catalog item.
pub type CatalogId = u64;

/// Identifier of a section, category or subcategory. The catalog service
/// emits either numbers or strings for these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(u64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Number(n) => write!(f, "{}", n),
            NodeId::Text(s) => f.write_str(s),
        }
    }
}

/// Reference to an alternative-size item in the same subcategory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: CatalogId,
}

/// Reference to an alternative-colour item, with the swatch colour to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariantRef {
    pub id: CatalogId,
    #[serde(default)]
    pub color: Option<String>,
}

/// A placeable product. Dimensions are in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogId,
    #[serde(default)]
    pub name: String,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    #[serde(alias = "modelPath", default)]
    pub model_path: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub width_variants: Option<Vec<VariantRef>>,
    #[serde(default)]
    pub color_variants: Option<Vec<ColorVariantRef>>,
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(alias = "imgPreviewPath", default)]
    pub img_preview_path: Option<String>,
    #[serde(alias = "img2dPath", default)]
    pub img_2d_path: Option<String>,
    #[serde(alias = "imgPath", default)]
    pub img_path: Option<String>,
}

impl CatalogItem {
    /// Creates an item with the required fields; optional fields are unset.
    pub fn new(
        id: CatalogId,
        name: impl Into<String>,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            depth,
            height,
            model_path: String::new(),
            price: None,
            width_variants: None,
            color_variants: None,
            show: None,
            img_preview_path: None,
            img_2d_path: None,
            img_path: None,
        }
    }

    /// Items are listed unless explicitly hidden.
    pub fn is_visible(&self) -> bool {
        self.show != Some(false)
    }

    /// Ids of the alternative-size items, empty when none are declared.
    pub fn width_variant_ids(&self) -> Vec<CatalogId> {
        self.width_variants
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|v| v.id)
            .collect()
    }

    /// Ids of the alternative-colour items, empty when none are declared.
    pub fn color_variant_ids(&self) -> Vec<CatalogId> {
        self.color_variants
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|v| v.id)
            .collect()
    }

    /// Preview image, preferring the dedicated preview over the 2D and
    /// generic images.
    pub fn preview_image(&self) -> Option<&str> {
        self.img_preview_path
            .as_deref()
            .or(self.img_2d_path.as_deref())
            .or(self.img_path.as_deref())
    }

    /// "W×D×H cm" label with whole centimeters, truncated.
    pub fn dimensions_label(&self) -> String {
        format!(
            "{}×{}×{} cm",
            (self.width * 100.0).floor(),
            (self.depth * 100.0).floor(),
            (self.height * 100.0).floor()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: NodeId,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: NodeId,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// Top-level grouping of categories for the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: NodeId,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: Vec<NodeId>,
}

/// A size or colour alternative resolved against the owning subcategory.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOption<'a> {
    pub id: CatalogId,
    pub label: String,
    pub color: Option<String>,
    pub item: &'a CatalogItem,
}

/// The whole catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Parses a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            Error::Catalog(CatalogError::InvalidDocument {
                reason: e.to_string(),
            })
        })
    }

    /// Loads a catalog document from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded catalog from {}: {} sections, {} categories, {} items",
            path.as_ref().display(),
            catalog.sections.len(),
            catalog.categories.len(),
            catalog.items().count()
        );
        Ok(catalog)
    }

    /// Iterates every item in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.items.iter())
    }

    /// Finds an item by id. The first match in catalog order wins.
    pub fn find_item(&self, id: CatalogId) -> Option<&CatalogItem> {
        self.items().find(|item| item.id == id)
    }

    /// Like [`Catalog::find_item`], but reports a miss as an error.
    pub fn require_item(&self, id: CatalogId) -> std::result::Result<&CatalogItem, CatalogError> {
        self.find_item(id).ok_or(CatalogError::ItemNotFound { id })
    }

    /// The subcategory that contains the item.
    pub fn subcategory_of(&self, id: CatalogId) -> Option<&Subcategory> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .find(|s| s.items.iter().any(|item| item.id == id))
    }

    /// All items sharing the item's subcategory, including the item itself.
    pub fn sibling_items(&self, id: CatalogId) -> &[CatalogItem] {
        self.subcategory_of(id)
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
    }

    pub fn find_subcategory(&self, id: &NodeId) -> Option<&Subcategory> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .find(|s| &s.id == id)
    }

    /// Items of a subcategory the add-picker should list.
    pub fn visible_items(&self, subcategory: &NodeId) -> Vec<&CatalogItem> {
        self.find_subcategory(subcategory)
            .map(|s| s.items.iter().filter(|i| i.is_visible()).collect())
            .unwrap_or_default()
    }

    /// Categories referenced by a section, in catalog order.
    pub fn section_categories(&self, section: &Section) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| section.categories.contains(&c.id))
            .collect()
    }

    /// Size alternatives of an item. Variant ids that do not resolve inside
    /// the item's subcategory are dropped.
    pub fn width_variants_of(&self, id: CatalogId) -> Vec<VariantOption<'_>> {
        let Some(item) = self.find_item(id) else {
            return Vec::new();
        };
        let siblings = self.sibling_items(id);
        item.width_variants
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|variant| {
                siblings
                    .iter()
                    .find(|s| s.id == variant.id)
                    .map(|found| VariantOption {
                        id: variant.id,
                        label: found.dimensions_label(),
                        color: None,
                        item: found,
                    })
            })
            .collect()
    }

    /// Colour alternatives of an item, resolved the same way as sizes.
    pub fn color_variants_of(&self, id: CatalogId) -> Vec<VariantOption<'_>> {
        let Some(item) = self.find_item(id) else {
            return Vec::new();
        };
        let siblings = self.sibling_items(id);
        item.color_variants
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|variant| {
                siblings
                    .iter()
                    .find(|s| s.id == variant.id)
                    .map(|found| VariantOption {
                        id: variant.id,
                        label: found.name.clone(),
                        color: variant.color.clone(),
                        item: found,
                    })
            })
            .collect()
    }
}
