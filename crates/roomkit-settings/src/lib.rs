//! RoomKit Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CameraSettings, Config, EditorSettings, ViewSettings,
    MAX_RECENT_FILES,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
