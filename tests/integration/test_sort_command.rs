//! End-to-end CLI tests for the sort command.
//!
//! These tests run the actual `mqsort sort` binary and validate:
//! 1. File-to-file sorting (order and multiset preservation)
//! 2. In-memory sorting of generated data
//! 3. The --verify mode
//! 4. Error paths (missing input, NaN input, invalid tunables)

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Write one value per line.
fn write_data_file(path: &Path, values: &[f64]) {
    let body: String = values.iter().map(|v| format!("{v}\n")).collect();
    std::fs::write(path, body).expect("Failed to write data file");
}

/// Read one value per line.
fn read_data_file(path: &Path) -> Vec<f64> {
    std::fs::read_to_string(path)
        .expect("Failed to read data file")
        .lines()
        .map(|line| line.parse().expect("Failed to parse value"))
        .collect()
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut copy = values.to_vec();
    copy.sort_by(f64::total_cmp);
    copy
}

#[test]
fn test_sort_file_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");

    let values = vec![0.9, 0.1, 0.5, 0.5, -3.0, 1e12, 0.0, 7.25];
    write_data_file(&input, &values);

    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args([
            "sort",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--threads",
            "4",
        ])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(status.success());

    assert_eq!(read_data_file(&output), sorted_copy(&values));
}

#[test]
fn test_sort_generated_values_with_tuning() {
    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args([
            "sort",
            "-n",
            "1000",
            "--seed",
            "7",
            "--threads",
            "4",
            "--queue-capacity",
            "50",
            "--cutoff",
            "10",
        ])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(status.success());
}

#[test]
fn test_verify_accepts_sorted_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sorted.txt");
    write_data_file(&input, &[-2.0, 0.0, 0.0, 1.5, 99.0]);

    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", input.to_str().unwrap(), "--verify"])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(status.success());
}

#[test]
fn test_verify_rejects_unsorted_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("unsorted.txt");
    write_data_file(&input, &[1.0, 3.0, 2.0]);

    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", input.to_str().unwrap(), "--verify"])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(!status.success());
}

#[test]
fn test_sort_missing_input_fails() {
    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", "/definitely/not/here.txt"])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(!status.success());
}

#[test]
fn test_sort_rejects_nan_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nan.txt");
    std::fs::write(&input, "1.0\nNaN\n2.0\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", input.to_str().unwrap()])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(!status.success());
}

#[test]
fn test_sort_rejects_zero_threads() {
    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-n", "100", "--threads", "0"])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(!status.success());
}

#[test]
fn test_sort_empty_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.txt");
    let output = temp_dir.path().join("out.txt");
    std::fs::write(&input, "").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(status.success());
    assert!(read_data_file(&output).is_empty());
}
