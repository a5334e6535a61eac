use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn write_input(name: &str, json: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("relax-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relax"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

const DIAMOND: &str = "[[0, 1, 4, null], [null, 0, -3, 5], [null, null, 0, 1], [null, null, null, 0]]";

#[test]
fn test_prints_input_and_output_tables() {
    let input = write_input("diamond.json", DIAMOND);
    let out = run(&["--file", input.to_str().unwrap(), "--padding", "4"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Input");
    assert_eq!(lines[1], "       A    B    C    D ");
    assert_eq!(lines[2], "   A   0    1    4    - ");
    assert!(lines.contains(&"Output"));
    assert!(lines.contains(&"   A   0    1   -2   -1 "));
    assert!(lines.contains(&"   D   -    -    -    0 "));
}

#[test]
fn test_paths_flag_adds_path_table() {
    let input = write_input("paths.json", DIAMOND);
    let out = run(&["-f", input.to_str().unwrap(), "-p", "8", "--paths"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Paths"));
    assert!(stdout.contains("A>B>C>D"));
}

#[test]
fn test_json_format() {
    let input = write_input("json.json", DIAMOND);
    let out = run(&["--file", input.to_str().unwrap(), "--format", "json"]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["distances"][0][3], -1.0);
    assert_eq!(report["paths"][0][2], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_invalid_matrix_is_reported() {
    let input = write_input("ragged.json", "[[0, 1], [0]]");
    let out = run(&["--file", input.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("all of its arrays must be the same length"), "{stderr}");
}

#[test]
fn test_negative_cycle_check_fails_run() {
    let input = write_input("cycle.json", "[[0, 1, null], [null, 0, -5], [null, 2, 0]]");

    let out = run(&["--file", input.to_str().unwrap()]);
    assert!(out.status.success());

    let out = run(&["--file", input.to_str().unwrap(), "--check-negative-cycles"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("negative-weight cycle"), "{stderr}");
}
