//! End-to-end checks of the `zerox-gen` binary.

use std::path::Path;
use std::process::{Command, Output};

fn write_config(dir: &Path, traits: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    let json = format!(
        r#"{{"canvas_size": 32, "frame_count": 2, "output_dir": {:?}, "traits": {}}}"#,
        dir.join("out").to_string_lossy(),
        traits
    );
    std::fs::write(&path, json).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zerox-gen"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_json_mode_stdout_is_only_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        r#"[{"name": "ONLY", "params": {"hue": 90.0, "saturation": 40.0}}]"#,
    );

    let out = run(&["--json", "--config", config.to_str().unwrap()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["items"], 8);
    assert!(summary["total_bytes"].as_u64().unwrap() > 0);
    assert!(dir.path().join("out").join("7.gif").is_file());
}

#[test]
fn test_json_single_item_stdout_is_only_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        r#"[{"name": "ONLY", "params": {"hue": 90.0, "saturation": 40.0}}]"#,
    );

    let out = run(&["--json", "--item", "3", "--config", config.to_str().unwrap()]);
    assert!(out.status.success());

    let entry: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(entry["index"], 3);
    assert_eq!(entry["file"], "3.gif");
}

#[test]
fn test_bad_trait_params_fail_cleanly_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        r#"[{"name": "BAD", "params": {"hue": 90.0, "saturation": -300.0}}]"#,
    );

    let out = run(&["--config", config.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("saturation"));
    assert!(!dir.path().join("out").exists());
}
