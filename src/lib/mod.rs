// Clippy lint configuration for CI
// These lints are allowed because:
// - cast_*: throughput/length arithmetic intentionally casts between numeric types
// - missing_errors_doc / missing_panics_doc: documentation improvements tracked separately
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::uninlined_format_args
)]

//! # mqsort - Message-Queue Parallel Quicksort Library
//!
//! This library sorts an `f64` array in place across a fixed number of
//! worker threads. All coordination flows through one bounded circular
//! channel that serves simultaneously as the work distributor, the
//! completion-reporting path, and the shutdown broadcast medium.
//!
//! ## Overview
//!
//! - **[`channel`]** - Bounded blocking FIFO channel (mutex + two condition
//!   variables over a circular buffer)
//! - **[`sort`]** - The parallel quicksort: messages, serial kernels, worker
//!   loop, and coordinator
//!
//! ### Utilities
//!
//! - **[`data_io`]** - Newline-delimited numeric file I/O (rejects NaN)
//! - **[`validation`]** - Input validation for parameters and files
//! - **[`logging`]** - Formatting helpers and operation timing
//! - **[`errors`]** - Structured error types
//!
//! ## Quick Start
//!
//! ```
//! use mqsort_lib::sort::{ParallelSortConfig, parallel_sort};
//!
//! # fn main() -> mqsort_lib::errors::Result<()> {
//! let mut values = vec![0.7, 0.1, 0.4, 0.9, 0.2];
//! parallel_sort(&mut values, &ParallelSortConfig::default())?;
//! assert_eq!(values, vec![0.1, 0.2, 0.4, 0.7, 0.9]);
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod data_io;
pub mod errors;
pub mod logging;
pub mod sort;
pub mod validation;
