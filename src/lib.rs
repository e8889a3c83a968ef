//! # RoomKit
//!
//! A room layout planner engine:
//! - Polygonal room outlines with presets, corner editing and annotations
//! - Furniture placed from a product catalog, with variants and pricing
//! - A 2D plan with grid snapping, zoom-to-cursor and pinch handling
//! - A derived 3D preview scene (walls, floor, ceiling, resolved models)
//!
//! ## Architecture
//!
//! RoomKit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Error taxonomy, units, catalog model
//! 2. **roomkit-designer** - Room/object models, views, scene derivation
//! 3. **roomkit-settings** - Configuration files and validation
//! 4. **roomkit** - Headless binary that integrates all crates

pub mod summary;

pub use roomkit_core::{
    Catalog, CatalogError, CatalogId, CatalogItem, Error, GeometryError, ImportError, LengthUnit,
    Result,
};
pub use roomkit_designer as designer;
pub use roomkit_designer::{
    CommandOutcome, DesignerCommand, DesignerState, ObjectId, PlacedObject, Point, RoomPolygon,
    RoomPreset, SceneDescription, ViewLayer, ViewMode,
};
pub use roomkit_settings::{Config, SettingsError};
pub use summary::LayoutSummary;

use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Filter for the given RUST_LOG directives; INFO when they are missing,
/// empty or malformed.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output (stderr, so reports on stdout stay clean)
/// - RUST_LOG environment variable support, INFO when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(directives.as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
