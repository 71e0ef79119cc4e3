//! Error types for the host shell.

use std::path::PathBuf;

use paperboard_render::RendererError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid gesture script {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Command {index} ({op}) failed: {message}")]
    Command {
        index: usize,
        op: &'static str,
        message: String,
    },

    #[error("Render error: {0}")]
    Render(#[from] RendererError),

    #[error("Nothing to export: the whiteboard has no raster target")]
    NothingToExport,
}
