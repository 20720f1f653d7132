//! Input validation utilities
//!
//! Common validation functions for command-line parameters and file paths
//! with consistent error messages. All validation functions use the
//! structured error types from [`crate::errors`] so failures carry full
//! context.

use crate::errors::{MqsortError, Result};
use std::path::Path;

/// Validate that a file exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input data")
///
/// # Errors
/// Returns an error if the file does not exist
///
/// # Example
/// ```
/// use mqsort_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/data.txt", "Input data");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(MqsortError::InvalidDataFile {
            path: path_ref.display().to_string(),
            reason: format!("{description} does not exist"),
        });
    }
    Ok(())
}

/// Validate that a numeric parameter is at least one
///
/// Used for the worker count, queue capacity, and insertion-sort cutoff,
/// all of which are meaningless at zero.
///
/// # Errors
/// Returns an error if `value` is zero
///
/// # Example
/// ```
/// use mqsort_lib::validation::validate_at_least_one;
///
/// assert!(validate_at_least_one("threads", 4).is_ok());
/// assert!(validate_at_least_one("threads", 0).is_err());
/// ```
pub fn validate_at_least_one(parameter: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(MqsortError::InvalidParameter {
            parameter: parameter.to_string(),
            reason: "must be >= 1".to_string(),
        });
    }
    Ok(())
}
