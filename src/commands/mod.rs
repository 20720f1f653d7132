//! CLI command implementations for mqsort.
//!
//! Each submodule implements one command:
//!
//! - [`sort`] - Sort a data file (or freshly generated random values) in
//!   parallel
//! - [`generate`] - Write a random data file for later sorting
//!
//! Shared pieces live in [`command`] (the dispatch trait) and [`common`]
//! (flattened argument groups and the random-data generator).

pub mod command;
pub mod common;
pub mod generate;
pub mod sort;
