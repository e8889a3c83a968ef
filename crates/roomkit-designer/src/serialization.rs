//! Serialization of layouts.
//!
//! Two formats exist:
//! - the scene export, a portable JSON list of placed-object records that
//!   other tools (and older versions of the planner) exchange;
//! - the project file, which additionally carries the room outline, camera,
//!   grid and layer so a session can be resumed exactly.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roomkit_core::{CatalogId, ImportError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::camera::CameraPose;
use crate::geometry::Point;
use crate::object::{ObjectId, PlacedObject};
use crate::room::RoomPolygon;
use crate::transform::GridConfig;
use crate::view::ViewLayer;

/// Project file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// One placed object in a scene export. Identity and selection are not part
/// of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    #[serde(alias = "id")]
    pub catalog_id: CatalogId,
    #[serde(alias = "posX")]
    pub pos_x: f64,
    #[serde(alias = "posY")]
    pub pos_y: f64,
    #[serde(alias = "scaleX")]
    pub scale_x: f64,
    #[serde(alias = "scaleY")]
    pub scale_y: f64,
    pub height: f64,
    #[serde(alias = "rotZ")]
    pub rotation_degrees: f64,
}

impl SceneRecord {
    pub fn from_object(object: &PlacedObject) -> Self {
        Self {
            catalog_id: object.catalog_id,
            pos_x: object.position.x,
            pos_y: object.position.y,
            scale_x: object.scale_x,
            scale_y: object.scale_y,
            height: object.height,
            rotation_degrees: object.rotation_degrees,
        }
    }

    /// Materialises the record with a fresh id, unselected.
    pub fn into_object(self) -> PlacedObject {
        PlacedObject {
            id: ObjectId::new(),
            catalog_id: self.catalog_id,
            position: Point::new(self.pos_x, self.pos_y),
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            height: self.height,
            rotation_degrees: self.rotation_degrees,
            selected: false,
        }
    }
}

/// Pretty-printed JSON list of records for `objects`.
pub fn export_scene<'a>(
    objects: impl IntoIterator<Item = &'a PlacedObject>,
) -> serde_json::Result<String> {
    let records: Vec<SceneRecord> = objects.into_iter().map(SceneRecord::from_object).collect();
    serde_json::to_string_pretty(&records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Parses a scene export. Every object gets a new id. Unknown fields are
/// ignored; anything else malformed rejects the whole document.
pub fn import_scene(json: &str) -> std::result::Result<Vec<PlacedObject>, ImportError> {
    let value: Value = serde_json::from_str(json).map_err(|e| ImportError::Malformed {
        reason: e.to_string(),
    })?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(ImportError::NotAList {
                found: json_type_name(&other).to_string(),
            })
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(ImportError::InvalidRecord {
                    index,
                    reason: format!("expected an object, found {}", json_type_name(&entry)),
                });
            }
            serde_json::from_value::<SceneRecord>(entry)
                .map(SceneRecord::into_object)
                .map_err(|e| ImportError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Complete project file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: String,
    pub metadata: ProjectMetadata,
    pub room: RoomPolygon,
    #[serde(default)]
    pub objects: Vec<PlacedObject>,
    #[serde(default)]
    pub camera: CameraPose,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub active_layer: ViewLayer,
}

impl ProjectFile {
    /// Create a new project with the default room and nothing placed
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            room: RoomPolygon::default(),
            objects: Vec::new(),
            camera: CameraPose::default(),
            grid: GridConfig::default(),
            active_layer: ViewLayer::default(),
        }
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize project")?;

        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;

        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;

        let project: ProjectFile =
            serde_json::from_str(&content).context("Failed to parse project file")?;

        Ok(project)
    }
}
