//! Integration tests for the fishbone binary.
//!
//! These tests run the compiled binary and check its JSON/SVG output and
//! exit status.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the binary cargo built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fishbone"))
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

const OUTLINE: &str = "\
Late deliveries
- People
  - Not enough drivers
- Machines
";

#[test]
fn test_seed_json() {
    let out = stdout_of(&run_binary("", &["--seed"]));
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(v["nodes"].as_array().unwrap().len(), 14);
    assert_eq!(v["edges"].as_array().unwrap().len(), 7);
    let spine = &v["edges"][0];
    assert_eq!(spine["sourceId"], "__tail");
    assert_eq!(spine["targetId"], "root");
    assert_eq!(spine["style"], "spine");
    let root = v["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["kind"] == "root")
        .unwrap();
    assert_eq!(root["label"], "VẤN ĐỀ CHÍNH");
    assert_eq!(root["position"]["x"], 1850.0);
}

#[test]
fn test_outline_from_stdin() {
    let out = stdout_of(&run_binary(OUTLINE, &[]));
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    // 4 tree nodes + tail + 2 rib anchors
    assert_eq!(v["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(v["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn test_outline_from_file_to_svg() {
    let dir = std::env::temp_dir().join(format!("fishbone-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("causes.txt");
    let output = dir.join("causes.svg");
    std::fs::write(&input, OUTLINE).unwrap();

    let result = run_binary(
        "",
        &[
            input.to_str().unwrap(),
            "--format",
            "svg",
            "-o",
            output.to_str().unwrap(),
        ],
    );
    stdout_of(&result);
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Not enough drivers"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_config_file_changes_geometry() {
    let dir = std::env::temp_dir().join(format!("fishbone-cfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("layout.json");
    std::fs::write(&config, r#"{"spacing_x": 100, "root_offset_x": 0}"#).unwrap();

    let out = stdout_of(&run_binary("", &["--seed", "-c", config.to_str().unwrap()]));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let root = v["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["kind"] == "root")
        .unwrap();
    assert_eq!(root["position"]["x"], 700.0);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_bad_outline_fails_with_line_number() {
    let output = run_binary("P\n- a\n      - b\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: line 3"), "stderr: {stderr}");
}

#[test]
fn test_unknown_format_fails() {
    let output = run_binary("", &["--seed", "--format", "png"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("png"), "stderr: {stderr}");
}

#[test]
fn test_missing_input_file_fails() {
    let output = run_binary("", &["/definitely/not/here.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}
