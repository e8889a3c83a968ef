//! Configuration and settings management for RoomKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor defaults (grid, rotation step, wall height, history)
//! - View preferences (zoom, layer dimming, units)
//! - Initial 3D camera pose

pub use roomkit_core::units::LengthUnit;
use glam::Vec3;
use roomkit_designer::camera::{CameraPose, CameraState};
use roomkit_designer::room::RoomPreset;
use roomkit_designer::transform::GridConfig;
use roomkit_designer::viewport::{MAX_SCALE, MIN_SCALE};
use roomkit_designer::{DesignerState, EditorOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Maximum number of entries kept in the recent files list
pub const MAX_RECENT_FILES: usize = 10;

/// Editor defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid cell size a new session starts with, in centimeters
    pub initial_cell_size_cm: u32,
    /// Degrees per press of a rotate button
    pub rotation_step_degrees: f64,
    /// Wall height of the 3D preview, in meters
    pub wall_height_m: f64,
    /// Undo steps kept
    pub history_limit: usize,
    /// Room outline of a new project
    pub default_preset: RoomPreset,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            initial_cell_size_cm: 10,
            rotation_step_degrees: 5.0,
            wall_height_m: 2.0,
            history_limit: 100,
            default_preset: RoomPreset::FourCorner,
        }
    }
}

/// View preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Plan zoom of a new session
    pub initial_zoom: f64,
    /// Zoom factor per wheel notch
    pub wheel_zoom_factor: f64,
    /// Opacity of objects outside the active layer
    pub inactive_layer_opacity: f32,
    /// Unit for length read-outs
    pub length_unit: LengthUnit,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            initial_zoom: 0.3,
            wheel_zoom_factor: 1.05,
            inactive_layer_opacity: 0.2,
            length_unit: LengthUnit::Centimeters,
        }
    }
}

/// Initial 3D camera pose, in world units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub target: [f32; 3],
}

impl CameraSettings {
    pub fn to_pose(&self) -> CameraPose {
        CameraPose::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.rotation),
            Vec3::from_array(self.target),
        )
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        let pose = CameraPose::default();
        Self {
            position: pose.position().to_array(),
            rotation: pose.rotation.to_array(),
            target: pose.target.to_array(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent files list
    pub recent_files: Vec<PathBuf>,
    /// Editor defaults
    pub editor: EditorSettings,
    /// View preferences
    pub view: ViewSettings,
    /// Initial camera
    pub camera: CameraSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Default config location: `<config dir>/roomkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("roomkit").join("config.toml"))
        .ok_or(SettingsError::NoConfigDir)
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        let write_error = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, content).map_err(write_error)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let editor = &self.editor;
        if GridConfig::from_cell_size_cm(editor.initial_cell_size_cm).is_none() {
            return Err(ConfigError::out_of_range(
                "editor.initial_cell_size_cm",
                editor.initial_cell_size_cm,
            ));
        }
        if !(editor.rotation_step_degrees > 0.0 && editor.rotation_step_degrees.is_finite()) {
            return Err(ConfigError::out_of_range(
                "editor.rotation_step_degrees",
                editor.rotation_step_degrees,
            ));
        }
        if !(editor.wall_height_m > 0.0 && editor.wall_height_m.is_finite()) {
            return Err(ConfigError::out_of_range("editor.wall_height_m", editor.wall_height_m));
        }
        if editor.history_limit == 0 {
            return Err(ConfigError::out_of_range("editor.history_limit", editor.history_limit));
        }

        let view = &self.view;
        if !(MIN_SCALE..=MAX_SCALE).contains(&view.initial_zoom) {
            return Err(ConfigError::out_of_range("view.initial_zoom", view.initial_zoom));
        }
        if !(view.wheel_zoom_factor > 1.0 && view.wheel_zoom_factor.is_finite()) {
            return Err(ConfigError::out_of_range(
                "view.wheel_zoom_factor",
                view.wheel_zoom_factor,
            ));
        }
        if !(0.0..=1.0).contains(&view.inactive_layer_opacity) {
            return Err(ConfigError::out_of_range(
                "view.inactive_layer_opacity",
                view.inactive_layer_opacity,
            ));
        }

        let camera = &self.camera;
        let finite = |v: &[f32; 3]| v.iter().all(|c| c.is_finite());
        if !(finite(&camera.position) && finite(&camera.rotation) && finite(&camera.target)) {
            return Err(ConfigError::out_of_range("camera", format!("{:?}", camera)));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    /// Editor tunables for a designer state
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            rotation_step_degrees: self.editor.rotation_step_degrees,
            wall_height_m: self.editor.wall_height_m,
            inactive_layer_opacity: self.view.inactive_layer_opacity,
            wheel_zoom_factor: self.view.wheel_zoom_factor,
            initial_zoom: self.view.initial_zoom,
            history_limit: self.editor.history_limit,
        }
    }

    /// A fresh designer state configured from these settings
    pub fn new_designer_state(&self) -> DesignerState {
        let mut state = DesignerState::with_options(self.editor_options());
        state.room.apply_preset(self.editor.default_preset);
        if let Some(grid) = GridConfig::from_cell_size_cm(self.editor.initial_cell_size_cm) {
            state.grid = grid;
        }
        state.camera = CameraState::new(self.camera.to_pose());
        state
    }
}
