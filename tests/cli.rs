//! Binary behavior: exit codes, stdout report, stderr errors.

use std::io::Write;
use std::process::{Command, Output};

use u_twoopt::generate::random_euclidean;
use u_twoopt::io::{load_matrix, parse_matrix};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_u-twoopt"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn u-twoopt")
}

fn matrix_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write");
    file
}

#[test]
fn truncated_file_exits_with_error() {
    let file = matrix_file("3\n0 1 2\n1 0");
    let path = file.path().to_str().expect("utf-8 path");

    let output = run_cli(&["solve", path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing distance at (1, 2)"), "stderr: {stderr}");
}

#[test]
fn missing_file_exits_with_error() {
    let output = run_cli(&["solve", "/nonexistent/distances.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn solve_prints_report() {
    let file = matrix_file("4\n0 1 9 1\n1 0 1 9\n9 1 0 1\n1 9 1 0\n");
    let path = file.path().to_str().expect("utf-8 path");

    let output = run_cli(&["solve", path, "--runs", "3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Optimized tour: 0 1 2 3");
    assert_eq!(lines[1], "Total improvement: 0.000000");
    assert_eq!(lines[2], "Iterations: 0");
    assert!(lines[3].starts_with("Average time spent: "));
    assert!(lines[3].ends_with(" seconds"));
}

#[test]
fn solve_json_output() {
    let file = matrix_file("4\n0 4 4 4\n3 0 3 3\n4 2 0 5\n5 2 1 0\n");
    let path = file.path().to_str().expect("utf-8 path");

    let output = run_cli(&["solve", path, "--json", "--runs", "1", "--max-iterations", "7"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["runs"], 1);
    assert_eq!(json["result"]["iterations"], 7);
    assert_eq!(json["result"]["termination"], "capped_out");
    assert!(json["average"].is_f64());
}

#[test]
fn generate_to_stdout_loads_back() {
    let output = run_cli(&["generate", "12", "-", "--seed", "3"]);
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let dm = parse_matrix(&text).expect("generated matrix parses");
    assert_eq!(dm, random_euclidean(12, 3));
}

#[test]
fn generate_to_file_loads_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cities.txt");
    let path_str = path.to_str().expect("utf-8 path");

    let output = run_cli(&["generate", "8", path_str, "--seed", "9"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let dm = load_matrix(&path).expect("load generated file");
    assert_eq!(dm, random_euclidean(8, 9));
}
