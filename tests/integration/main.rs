//! Integration tests for mqsort.
//!
//! These tests validate end-to-end workflows: the CLI binary surface and the
//! full sort pipeline from data file to sorted output.

mod test_generate_command;
mod test_sort_command;
mod test_sort_pipeline;
