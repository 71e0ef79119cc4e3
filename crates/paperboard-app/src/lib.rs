//! Paperboard Application
//!
//! Host shell around the drawing surface: the [`Whiteboard`] view binding a
//! surface to a raster target, configuration loading, and gesture-script
//! replay for the `paperboard` CLI.

mod args;
pub mod config;
mod error;
pub mod script;
mod whiteboard;

pub use args::Args;
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use script::{Command, GestureScript};
pub use whiteboard::{RasterExport, RenderStyle, Whiteboard};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

/// Run the Paperboard CLI
///
/// Replays the gesture script against a freshly mounted whiteboard and writes
/// the exported PNG into the output directory. Returns the PNG path.
///
/// # Errors
///
/// Returns `AppError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed scripts or commands
/// - Font loading errors
/// - An empty raster (nothing to export)
pub fn run(args: &Args) -> Result<PathBuf, AppError> {
    info!("Replaying gesture script {}", args.script);

    let config = config::load_config(args.config.as_deref().map(Path::new))?;

    let source = fs::read_to_string(&args.script)?;
    let script = GestureScript::from_json(&source).map_err(|source| AppError::Script {
        path: PathBuf::from(&args.script),
        source,
    })?;

    let mut whiteboard = Whiteboard::from_config(&config)?;
    whiteboard.set_info(script.board_info(whiteboard.info().clone()));
    whiteboard.mount(config.canvas.width, config.canvas.height);

    let applied = script.replay(&mut whiteboard)?;
    info!(
        "Applied {applied} commands, {} elements on '{}'",
        whiteboard.surface().scene().len(),
        whiteboard.title()
    );

    let export = whiteboard.export_raster().ok_or(AppError::NothingToExport)?;
    fs::create_dir_all(&args.output_dir)?;
    let png_path = Path::new(&args.output_dir).join(sanitize_file_name(&export.file_name));
    fs::write(&png_path, &export.png)?;
    info!(
        "PNG exported to {} ({}x{})",
        png_path.display(),
        export.width,
        export.height
    );

    if let Some(scene_path) = &args.scene_json {
        let json = whiteboard
            .surface()
            .scene()
            .to_json()
            .map_err(std::io::Error::other)?;
        fs::write(scene_path, json)?;
        info!("Scene written to {scene_path}");
    }

    Ok(png_path)
}

/// Replace path separators so a board name cannot escape the output directory.
fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
