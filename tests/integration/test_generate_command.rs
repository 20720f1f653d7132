//! End-to-end CLI tests for the generate command.

use std::process::Command;
use tempfile::TempDir;

fn read_data_file(path: &std::path::Path) -> Vec<f64> {
    std::fs::read_to_string(path)
        .expect("Failed to read data file")
        .lines()
        .map(|line| line.parse().expect("Failed to parse value"))
        .collect()
}

fn run_generate(output: &std::path::Path, count: usize, seed: u64) {
    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args([
            "generate",
            "-n",
            &count.to_string(),
            "--seed",
            &seed.to_string(),
            "-o",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to run mqsort generate");
    assert!(status.success());
}

#[test]
fn test_generate_writes_requested_count() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("data.txt");

    run_generate(&output, 250, 1);

    let values = read_data_file(&output);
    assert_eq!(values.len(), 250);
    assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn test_generate_seed_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");

    run_generate(&first, 100, 42);
    run_generate(&second, 100, 42);

    assert_eq!(read_data_file(&first), read_data_file(&second));
}

#[test]
fn test_generate_then_sort_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data.txt");
    let sorted = temp_dir.path().join("sorted.txt");

    run_generate(&data, 500, 3);

    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", data.to_str().unwrap(), "-o", sorted.to_str().unwrap()])
        .status()
        .expect("Failed to run mqsort sort");
    assert!(status.success());

    // The sorted file must be verifiable by the tool itself.
    let status = Command::new(env!("CARGO_BIN_EXE_mqsort"))
        .args(["sort", "-i", sorted.to_str().unwrap(), "--verify"])
        .status()
        .expect("Failed to run mqsort sort --verify");
    assert!(status.success());

    // And it must hold the same multiset as the input.
    let mut input_values = read_data_file(&data);
    input_values.sort_by(f64::total_cmp);
    assert_eq!(read_data_file(&sorted), input_values);
}
