//! Configuration file loading.
//!
//! Search order: an explicit path, then `paperboard.toml` in the working
//! directory, then built-in defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use paperboard_core::SerializableColor;
use paperboard_render::{DEFAULT_GRID_SIZE, GridStyle};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::whiteboard::RenderStyle;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "paperboard.toml";

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Raster target settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub selection_color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "#ffffff".to_string(),
            selection_color: "#3B82F6".to_string(),
        }
    }
}

/// Reference grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// `lines` or `none`.
    pub style: String,
    pub size: f64,
    pub color: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            style: "lines".to_string(),
            size: DEFAULT_GRID_SIZE,
            color: "#f0f0f0".to_string(),
        }
    }
}

/// Text rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Font file; the embedded font is used when unset.
    pub font: Option<PathBuf>,
}

/// Default board metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub name: Option<String>,
    pub team: Option<String>,
    pub members: usize,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub grid: GridConfig,
    pub text: TextConfig,
    pub board: BoardConfig,
}

impl AppConfig {
    /// Resolve colors and grid settings for the renderer.
    pub fn render_style(&self) -> Result<RenderStyle, ConfigError> {
        let grid_style = GridStyle::from_name(&self.grid.style).ok_or_else(|| {
            ConfigError::Validation(format!("unknown grid style '{}'", self.grid.style))
        })?;
        if !(self.grid.size.is_finite() && self.grid.size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "grid size must be positive, got {}",
                self.grid.size
            )));
        }

        Ok(RenderStyle {
            background: parse_color(&self.canvas.background)?,
            grid_style,
            grid_size: self.grid.size,
            grid_color: parse_color(&self.grid.color)?,
            selection_color: parse_color(&self.canvas.selection_color)?,
        })
    }
}

/// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` color.
pub fn parse_color(value: &str) -> Result<Color, ConfigError> {
    SerializableColor::from_hex(value)
        .map(Color::from)
        .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))
}

/// Find and load configuration, looking in the working directory.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_in(explicit_path, Path::new("."))
}

/// Find and load configuration, looking for the local file in `dir`.
pub fn load_config_in(explicit_path: Option<&Path>, dir: &Path) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        info!("Loading configuration from explicit path {}", path.display());
        return load_config_file(path);
    }

    let local_config = dir.join(LOCAL_CONFIG_FILE);
    if local_config.exists() {
        info!("Loading configuration from local path {}", local_config.display());
        return load_config_file(&local_config);
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_any_file() {
        let dir = tempdir().unwrap();
        let config = load_config_in(None, dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());

        let style = config.render_style().unwrap();
        assert_eq!(style.grid_style, GridStyle::Lines);
        let bg = style.background.to_rgba8();
        assert_eq!((bg.r, bg.g, bg.b, bg.a), (255, 255, 255, 255));
        assert!((style.grid_size - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_local_file_is_found() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[canvas]\nwidth = 320\nheight = 200\n\n[board]\nname = \"Retro\"\n",
        )
        .unwrap();

        let config = load_config_in(None, dir.path()).unwrap();
        assert_eq!((config.canvas.width, config.canvas.height), (320, 200));
        assert_eq!(config.board.name.as_deref(), Some("Retro"));
        // Unset sections keep their defaults.
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_explicit_path_wins_over_local_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(LOCAL_CONFIG_FILE), "[canvas]\nwidth = 1\n").unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[grid]\nstyle = \"none\"\n").unwrap();

        let config = load_config_in(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.render_style().unwrap().grid_style, GridStyle::None);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config_in(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(path) if path == missing));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();
        assert!(matches!(load_config_in(Some(&path), dir.path()), Err(ConfigError::Parse(_))));

        fs::write(&path, "[canvas]\nzoom = 2\n").unwrap();
        assert!(matches!(load_config_in(Some(&path), dir.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_style_values() {
        let mut config = AppConfig::default();
        config.canvas.background = "white".to_string();
        assert!(matches!(config.render_style(), Err(ConfigError::InvalidColor(c)) if c == "white"));

        let mut config = AppConfig::default();
        config.grid.style = "dots".to_string();
        assert!(matches!(config.render_style(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.grid.size = 0.0;
        assert!(matches!(config.render_style(), Err(ConfigError::Validation(_))));
    }
}
