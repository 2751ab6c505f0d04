//! Integration tests for the galaxy-slicer binary.
//!
//! Spawns the binary against the bundled catalog and checks its output.

use std::path::PathBuf;
use std::process::{Command, Output};

fn data(file: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(file)
        .display()
        .to_string()
}

/// Runs the binary with the bundled catalog plus the given arguments.
fn run(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_galaxy-slicer");
    Command::new(exe)
        .arg("--tiles")
        .arg(data("tiles.json"))
        .arg("--planets")
        .arg(data("planets.json"))
        .args(args)
        .output()
        .expect("failed to start galaxy-slicer")
}

#[test]
fn text_output_lists_six_slices() {
    let out = run(&["--seed", "5", "--quiet"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    for n in 1..=6 {
        assert!(stdout.contains(&format!("Slice {}\n", n)), "missing slice {}", n);
    }
    assert!(!stdout.contains("Slice 7"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Absolute value : ")).count(), 6);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Wormholes: ")).count(), 6);
}

#[test]
fn json_output_is_valid() {
    let out = run(&["--seed", "8", "--json", "--quiet"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

    let slices = value["slices"].as_array().unwrap();
    assert_eq!(slices.len(), 6);
    for slice in slices {
        let positions = slice["positions"].as_array().unwrap();
        assert_eq!(positions.len(), 7);
        assert_eq!(positions.iter().filter(|p| !p.is_null()).count(), 5);
    }
    assert!(value["excluded_tile"].is_u64());
}

#[test]
fn same_seed_same_output() {
    let a = run(&["--seed", "31", "--quiet"]);
    let b = run(&["--seed", "31", "--quiet"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn unsupported_player_count_exits_with_error() {
    let out = run(&["--players", "4", "--quiet"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unsupported player count 4"));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_catalog_exits_with_error() {
    let out = Command::new(env!("CARGO_BIN_EXE_galaxy-slicer"))
        .args(["--tiles", "/nonexistent/tiles.json", "--quiet"])
        .output()
        .expect("failed to start galaxy-slicer");
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("/nonexistent/tiles.json"));
}

#[test]
fn unknown_argument_is_rejected() {
    let out = run(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Unknown argument: --frobnicate"));
}
