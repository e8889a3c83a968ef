use anyhow::Context;
use clap::Parser;
use roomkit::{init_logging, Catalog, Config, DesignerState, LayoutSummary};
use roomkit_settings::default_config_path;
use std::path::PathBuf;

/// RoomKit - headless room layout planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project file to open
    #[arg(value_name = "LAYOUT")]
    layout_path: Option<PathBuf>,

    /// Product catalog (JSON)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Settings file (TOML or JSON)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Scene file to import into the layout
    #[arg(long, value_name = "SCENE")]
    import: Option<PathBuf>,

    /// Write the placed objects to a scene file
    #[arg(long, value_name = "SCENE")]
    export: Option<PathBuf>,

    /// Save the resulting project file
    #[arg(long, value_name = "PROJECT")]
    save: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    tracing::info!("RoomKit v{} ({})", roomkit::VERSION, roomkit::BUILD_DATE);

    let settings_path = match cli.settings {
        Some(path) => Some(path),
        None => default_config_path()
            .map_err(|e| tracing::warn!("{}", e))
            .ok(),
    };
    let mut config = match &settings_path {
        Some(path) => Config::load_or_default(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Config::default(),
    };

    let catalog = cli
        .catalog
        .as_ref()
        .map(|path| {
            Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))
        })
        .transpose()?;

    let mut state: DesignerState = config.new_designer_state();
    if let Some(path) = &cli.layout_path {
        state
            .load_from_file(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }

    if let Some(path) = &cli.import {
        let count = state.import_scene_from_file(path)?;
        tracing::info!("Imported {} objects from {}", count, path.display());
    }

    let summary = LayoutSummary::from_state(&state, catalog.as_ref(), config.view.length_unit);
    println!("{}", summary);

    if let Some(path) = &cli.export {
        state.export_scene_to_file(path)?;
        tracing::info!("Exported scene to {}", path.display());
    }

    if let Some(path) = &cli.save {
        state
            .save_to_file(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        config.add_recent_file(path.clone());
        if let Some(settings_path) = &settings_path {
            if let Err(e) = config.save_to_file(settings_path) {
                tracing::warn!("Could not update recent files: {}", e);
            }
        }
    }

    Ok(())
}
