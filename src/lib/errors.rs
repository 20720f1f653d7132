//! Custom error types for mqsort operations.

use thiserror::Error;

/// Result type alias for mqsort operations
pub type Result<T> = std::result::Result<T, MqsortError>;

/// Error type for mqsort operations
#[derive(Error, Debug)]
pub enum MqsortError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Data file missing or unusable
    #[error("Invalid data file '{path}': {reason}")]
    InvalidDataFile {
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },

    /// A line of a data file did not hold a sortable number
    #[error("Invalid value on line {line} of '{path}': {reason}")]
    InvalidDataValue {
        /// Path to the file
        path: String,
        /// One-based line number
        line: usize,
        /// Explanation of the problem
        reason: String,
    },

    /// I/O failure while reading or writing a data file
    #[error("I/O error on '{path}'")]
    Io {
        /// Path to the file
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A worker thread could not be spawned; the pool is never left
    /// partially running
    #[error("Failed to spawn sort worker {index}")]
    WorkerSpawn {
        /// Index of the worker that failed to start
        index: usize,
        /// The underlying spawn error
        #[source]
        source: std::io::Error,
    },
}
