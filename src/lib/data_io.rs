//! Reading and writing newline-delimited numeric data files.
//!
//! The sort core assumes NaN-free input (NaN has no place in a total order),
//! so this module is the boundary that enforces it: [`read_values`] rejects
//! NaN with a structured error naming the offending line. Blank lines are
//! skipped; leading and trailing whitespace is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::{MqsortError, Result};

/// Reads one `f64` per line from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line fails to parse as a
/// number, or a parsed value is NaN.
pub fn read_values<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path_ref = path.as_ref();
    let display = path_ref.display().to_string();

    let file = File::open(path_ref)
        .map_err(|source| MqsortError::Io { path: display.clone(), source })?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MqsortError::Io { path: display.clone(), source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: f64 = trimmed.parse().map_err(|_| MqsortError::InvalidDataValue {
            path: display.clone(),
            line: index + 1,
            reason: format!("'{trimmed}' is not a number"),
        })?;
        if value.is_nan() {
            return Err(MqsortError::InvalidDataValue {
                path: display,
                line: index + 1,
                reason: "NaN is not sortable".to_string(),
            });
        }
        values.push(value);
    }
    Ok(values)
}

/// Writes one `f64` per line to `path`, creating or truncating the file.
///
/// Values are written with Rust's shortest round-trip formatting, so a
/// write/read cycle reproduces them exactly.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_values<P: AsRef<Path>>(path: P, values: &[f64]) -> Result<()> {
    let path_ref = path.as_ref();
    let display = path_ref.display().to_string();

    let file = File::create(path_ref)
        .map_err(|source| MqsortError::Io { path: display.clone(), source })?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{value}")
            .map_err(|source| MqsortError::Io { path: display.clone(), source })?;
    }
    writer.flush().map_err(|source| MqsortError::Io { path: display, source })?;
    Ok(())
}
