//! Gesture scripts: recorded pointer and toolbar input, replayed in order.
//!
//! ```json
//! {
//!   "board": "Sprint Planning",
//!   "commands": [
//!     { "op": "tool", "tool": "rectangle" },
//!     { "op": "down", "x": 10, "y": 10 },
//!     { "op": "move", "x": 50, "y": 80 },
//!     { "op": "up", "x": 50, "y": 80 }
//!   ]
//! }
//! ```

use kurbo::Point;
use paperboard_core::{BoardInfo, SerializableColor, ToolKind};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::whiteboard::Whiteboard;

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Tool { tool: ToolKind },
    /// Hex color, `#rgb`, `#rrggbb` or `#rrggbbaa`.
    Color { color: String },
    Width { width: f64 },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    /// Answers the live text request.
    CommitText { text: String },
    /// Withdraws the live text request.
    CancelText,
    Clear,
    Resize { width: u32, height: u32 },
}

impl Command {
    /// Operation name as written in scripts.
    pub fn op(&self) -> &'static str {
        match self {
            Command::Tool { .. } => "tool",
            Command::Color { .. } => "color",
            Command::Width { .. } => "width",
            Command::Down { .. } => "down",
            Command::Move { .. } => "move",
            Command::Up { .. } => "up",
            Command::Leave => "leave",
            Command::CommitText { .. } => "commit_text",
            Command::CancelText => "cancel_text",
            Command::Clear => "clear",
            Command::Resize { .. } => "resize",
        }
    }
}

/// A recorded session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureScript {
    /// Whiteboard name; overrides the configured one.
    pub board: Option<String>,
    /// Team name; overrides the configured one.
    pub team: Option<String>,
    pub commands: Vec<Command>,
}

impl GestureScript {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Apply the script's names on top of `info`.
    pub fn board_info(&self, mut info: BoardInfo) -> BoardInfo {
        if let Some(board) = &self.board {
            info.whiteboard_name = Some(board.clone());
        }
        if let Some(team) = &self.team {
            info.team_name = Some(team.clone());
        }
        info
    }

    /// Feed every command to `whiteboard`. Returns the number applied.
    ///
    /// Text answers with no live request are skipped with a warning.
    pub fn replay(&self, whiteboard: &mut Whiteboard) -> Result<usize, AppError> {
        for (index, command) in self.commands.iter().enumerate() {
            log::debug!("Command {index}: {command:?}");
            apply(whiteboard, index, command)?;
        }
        Ok(self.commands.len())
    }
}

fn apply(whiteboard: &mut Whiteboard, index: usize, command: &Command) -> Result<(), AppError> {
    match command {
        Command::Tool { tool } => whiteboard.set_tool(*tool),
        Command::Color { color } => {
            let color = SerializableColor::from_hex(color).ok_or_else(|| AppError::Command {
                index,
                op: command.op(),
                message: format!("invalid color '{color}'"),
            })?;
            whiteboard.set_color(color);
        }
        Command::Width { width } => whiteboard.set_stroke_width(*width),
        Command::Down { x, y } => {
            if let Some(request) = whiteboard.pointer_down(Point::new(*x, *y)) {
                log::debug!("Text requested at ({x}, {y}) as {}", request.id);
            }
        }
        Command::Move { x, y } => whiteboard.pointer_move(Point::new(*x, *y)),
        Command::Up { x, y } => whiteboard.pointer_up(Point::new(*x, *y)),
        Command::Leave => whiteboard.pointer_leave(),
        Command::CommitText { text } => match whiteboard.pending_text() {
            Some(request) => {
                whiteboard.commit_text(request.id, text.as_str());
            }
            None => log::warn!("Command {index}: no text request to commit"),
        },
        Command::CancelText => match whiteboard.pending_text() {
            Some(request) => {
                whiteboard.cancel_text(request.id);
            }
            None => log::warn!("Command {index}: no text request to cancel"),
        },
        Command::Clear => whiteboard.clear(),
        Command::Resize { width, height } => whiteboard.resize(*width, *height),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whiteboard::RenderStyle;
    use paperboard_core::Element;
    use paperboard_render::SoftwareRenderer;

    fn board() -> Whiteboard {
        let mut board = Whiteboard::new(
            BoardInfo::default(),
            SoftwareRenderer::new(),
            RenderStyle::default(),
        );
        board.mount(120, 120);
        board
    }

    #[test]
    fn test_parse_commands() {
        let script = GestureScript::from_json(
            r##"{
                "board": "Retro",
                "commands": [
                    { "op": "tool", "tool": "ellipse" },
                    { "op": "color", "color": "#EF4444" },
                    { "op": "width", "width": 5 },
                    { "op": "down", "x": 1, "y": 2 },
                    { "op": "leave" },
                    { "op": "commit_text", "text": "hi" },
                    { "op": "resize", "width": 10, "height": 20 }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(script.board.as_deref(), Some("Retro"));
        assert_eq!(script.commands.len(), 7);
        assert_eq!(script.commands[0], Command::Tool { tool: ToolKind::Ellipse });
        assert_eq!(script.commands[3], Command::Down { x: 1.0, y: 2.0 });
        assert_eq!(script.commands[4].op(), "leave");
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        assert!(GestureScript::from_json(r#"{ "commands": [{ "op": "zoom" }] }"#).is_err());
        assert!(GestureScript::from_json(r#"{ "commands": [{ "op": "tool", "tool": "laser" }] }"#).is_err());
    }

    #[test]
    fn test_replay_drag_and_select() {
        let script = GestureScript {
            commands: vec![
                Command::Tool { tool: ToolKind::Rectangle },
                Command::Down { x: 10.0, y: 10.0 },
                Command::Move { x: 50.0, y: 80.0 },
                Command::Up { x: 50.0, y: 80.0 },
                Command::Tool { tool: ToolKind::Select },
                Command::Down { x: 30.0, y: 30.0 },
                Command::Move { x: 40.0, y: 40.0 },
                Command::Up { x: 40.0, y: 40.0 },
            ],
            ..GestureScript::default()
        };

        let mut board = board();
        assert_eq!(script.replay(&mut board).unwrap(), 8);
        match &board.surface().scene().elements()[0] {
            Element::Rectangle(r) => {
                assert_eq!(r.position, Point::new(20.0, 20.0));
                assert!((r.width - 40.0).abs() < f64::EPSILON);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_text_answers() {
        let script = GestureScript {
            commands: vec![
                Command::CommitText { text: "orphan".to_string() },
                Command::Tool { tool: ToolKind::Text },
                Command::Down { x: 5.0, y: 30.0 },
                Command::CancelText,
                Command::Down { x: 5.0, y: 30.0 },
                Command::CommitText { text: "kept".to_string() },
            ],
            ..GestureScript::default()
        };

        let mut board = board();
        script.replay(&mut board).unwrap();
        let elements = board.surface().scene().elements();
        assert_eq!(elements.len(), 1);
        assert!(matches!(&elements[0], Element::Text(t) if t.content == "kept"));
    }

    #[test]
    fn test_invalid_color_reports_index() {
        let script = GestureScript {
            commands: vec![
                Command::Clear,
                Command::Color { color: "blue".to_string() },
            ],
            ..GestureScript::default()
        };
        let err = script.replay(&mut board()).unwrap_err();
        assert!(matches!(err, AppError::Command { index: 1, op: "color", .. }));
    }

    #[test]
    fn test_board_info_overrides() {
        let script = GestureScript {
            board: Some("Roadmap".to_string()),
            ..GestureScript::default()
        };
        let info = script.board_info(BoardInfo::new("Configured").with_team("Core", 3));
        assert_eq!(info.title(), "Roadmap");
        assert_eq!(info.subtitle(), "Core");
    }
}
