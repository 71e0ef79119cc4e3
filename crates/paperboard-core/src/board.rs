//! Display metadata of the active whiteboard, supplied by the host.

use serde::{Deserialize, Serialize};

/// Title shown when the whiteboard has no name.
pub const UNTITLED_TITLE: &str = "Untitled Whiteboard";

/// File stem used for exports when the whiteboard has no name.
pub const DEFAULT_EXPORT_STEM: &str = "whiteboard";

/// Extension of raster exports.
pub const EXPORT_EXTENSION: &str = "png";

/// Names of the active whiteboard and team.
///
/// The surface only interpolates these strings; it never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    pub whiteboard_name: Option<String>,
    pub team_name: Option<String>,
    #[serde(default)]
    pub member_count: usize,
}

impl BoardInfo {
    pub fn new(whiteboard_name: impl Into<String>) -> Self {
        Self {
            whiteboard_name: Some(whiteboard_name.into()),
            ..Self::default()
        }
    }

    pub fn with_team(mut self, team_name: impl Into<String>, member_count: usize) -> Self {
        self.team_name = Some(team_name.into());
        self.member_count = member_count;
        self
    }

    /// The whiteboard name, if usable. A whitespace-only name counts as
    /// missing, so it falls back like an empty one instead of producing a
    /// blank title or a file named `   .png`.
    fn name(&self) -> Option<&str> {
        self.whiteboard_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Header title.
    pub fn title(&self) -> &str {
        self.name().unwrap_or(UNTITLED_TITLE)
    }

    /// Header subtitle (team name), empty when unknown.
    pub fn subtitle(&self) -> &str {
        self.team_name.as_deref().unwrap_or_default()
    }

    /// File stem for raster exports.
    pub fn export_stem(&self) -> &str {
        self.name().unwrap_or(DEFAULT_EXPORT_STEM)
    }

    /// Full file name for raster exports.
    pub fn export_file_name(&self) -> String {
        format!("{}.{}", self.export_stem(), EXPORT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_board() {
        let info = BoardInfo::new("Sprint Planning").with_team("Core", 4);
        assert_eq!(info.title(), "Sprint Planning");
        assert_eq!(info.subtitle(), "Core");
        assert_eq!(info.export_file_name(), "Sprint Planning.png");
    }

    #[test]
    fn test_fallbacks() {
        let info = BoardInfo::default();
        assert_eq!(info.title(), UNTITLED_TITLE);
        assert_eq!(info.subtitle(), "");
        assert_eq!(info.export_file_name(), "whiteboard.png");

        let blank = BoardInfo::new("   ");
        assert_eq!(blank.export_file_name(), "whiteboard.png");
    }
}
