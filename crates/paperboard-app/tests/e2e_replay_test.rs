use std::fs;

use tempfile::tempdir;

use paperboard_app::{AppError, Args, run};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn args(script: &str, output_dir: &str) -> Args {
    Args {
        script: script.to_string(),
        output_dir: output_dir.to_string(),
        config: None,
        scene_json: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_replay_writes_named_png_and_scene() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let script_path = temp_dir.path().join("session.json");
    fs::write(
        &script_path,
        r##"{
            "board": "Sprint Planning",
            "team": "Core",
            "commands": [
                { "op": "tool", "tool": "rectangle" },
                { "op": "down", "x": 10, "y": 10 },
                { "op": "move", "x": 50, "y": 80 },
                { "op": "up", "x": 50, "y": 80 },
                { "op": "tool", "tool": "stroke" },
                { "op": "color", "color": "#EF4444" },
                { "op": "down", "x": 100, "y": 100 },
                { "op": "move", "x": 150, "y": 120 },
                { "op": "leave" },
                { "op": "tool", "tool": "text" },
                { "op": "down", "x": 20, "y": 150 },
                { "op": "commit_text", "text": "Hello" },
                { "op": "tool", "tool": "select" },
                { "op": "down", "x": 30, "y": 30 },
                { "op": "move", "x": 40, "y": 40 },
                { "op": "up", "x": 40, "y": 40 }
            ]
        }"##,
    )
    .unwrap();

    let out_dir = temp_dir.path().join("out");
    let scene_path = temp_dir.path().join("scene.json");
    let mut args = args(
        &script_path.to_string_lossy(),
        &out_dir.to_string_lossy(),
    );
    args.scene_json = Some(scene_path.to_string_lossy().to_string());

    let png_path = run(&args).expect("replay should succeed");
    assert_eq!(png_path, out_dir.join("Sprint Planning.png"));

    let png = fs::read(&png_path).unwrap();
    assert_eq!(png[..8], PNG_SIGNATURE);

    let scene: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&scene_path).unwrap()).unwrap();
    let elements = scene["elements"].as_array().expect("elements array");
    let kinds: Vec<_> = elements
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["rectangle", "stroke", "text"]);
    assert_eq!(elements[0]["position"]["x"], 20.0);
    assert_eq!(elements[2]["content"], "Hello");
}

#[test]
fn e2e_default_export_name_and_config() {
    let temp_dir = tempdir().unwrap();
    let script_path = temp_dir.path().join("empty.json");
    fs::write(&script_path, r#"{ "commands": [] }"#).unwrap();
    let config_path = temp_dir.path().join("board.toml");
    fs::write(&config_path, "[canvas]\nwidth = 64\nheight = 32\n").unwrap();

    let mut args = args(
        &script_path.to_string_lossy(),
        &temp_dir.path().to_string_lossy(),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    let png_path = run(&args).unwrap();
    assert_eq!(png_path.file_name().unwrap(), "whiteboard.png");
    // IHDR width and height follow the signature and chunk header.
    let png = fs::read(&png_path).unwrap();
    assert_eq!(&png[16..24], &[0, 0, 0, 64, 0, 0, 0, 32]);
}

#[test]
fn e2e_errors() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().to_string_lossy().to_string();

    let missing = temp_dir.path().join("missing.json");
    let err = run(&args(&missing.to_string_lossy(), &dir)).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));

    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, r#"{ "commands": [{ "op": "spin" }] }"#).unwrap();
    let err = run(&args(&bad.to_string_lossy(), &dir)).unwrap_err();
    assert!(matches!(err, AppError::Script { .. }));

    let empty = temp_dir.path().join("zero.json");
    fs::write(&empty, r#"{ "commands": [{ "op": "resize", "width": 0, "height": 0 }] }"#).unwrap();
    let err = run(&args(&empty.to_string_lossy(), &dir)).unwrap_err();
    assert!(matches!(err, AppError::NothingToExport));

    let mut with_config = args(&empty.to_string_lossy(), &dir);
    with_config.config = Some(temp_dir.path().join("nope.toml").to_string_lossy().to_string());
    let err = run(&with_config).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}
