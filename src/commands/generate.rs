//! Generate random numeric data files for sorting.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use mqsort_lib::data_io::write_values;
use mqsort_lib::logging::format_count;

use crate::commands::command::Command;
use crate::commands::common::generate_values;

/// Generate a random data file.
///
/// Writes uniformly distributed values in `[0, 1)`, one per line, suitable
/// as input for `mqsort sort`.
#[derive(Debug, Parser)]
#[command(name = "generate", about = "Generate a random numeric data file")]
pub struct Generate {
    /// Number of values to generate.
    #[arg(short = 'n', long = "count")]
    pub count: usize,

    /// Output data file.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Seed for reproducible output.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl Command for Generate {
    fn execute(&self) -> Result<()> {
        let values = generate_values(self.count, self.seed);
        write_values(&self.output, &values)?;
        info!("Wrote {} values to {}", format_count(values.len() as u64), self.output.display());
        Ok(())
    }
}
