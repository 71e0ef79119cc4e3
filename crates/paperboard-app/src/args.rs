//! Command-line argument definitions for the `paperboard` CLI.
//!
//! The CLI replays a JSON gesture script against a whiteboard and writes the
//! exported PNG.

use clap::Parser;

/// Command-line arguments for the Paperboard gesture replayer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the gesture script (JSON)
    #[arg(help = "Path to the gesture script")]
    pub script: String,

    /// Directory the PNG is written to, named after the whiteboard
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also write the final scene as JSON to this path
    #[arg(long)]
    pub scene_json: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["paperboard", "demo.json"]).unwrap();
        assert_eq!(args.script, "demo.json");
        assert_eq!(args.output_dir, ".");
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        assert!(args.scene_json.is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "paperboard",
            "demo.json",
            "-o",
            "out",
            "-c",
            "board.toml",
            "--scene-json",
            "scene.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output_dir, "out");
        assert_eq!(args.config.as_deref(), Some("board.toml"));
        assert_eq!(args.scene_json.as_deref(), Some("scene.json"));
        assert_eq!(args.log_level, "debug");
    }
}
