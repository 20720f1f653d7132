//! Sort numeric data files in parallel.
//!
//! Work flows through a single bounded message queue shared by a fixed pool
//! of worker threads: large ranges are partitioned and re-enqueued, small
//! ranges are insertion-sorted in place, and completion reports flow back
//! through the same queue until the whole array is accounted for.
//!
//! # Verification
//!
//! Use `--verify` to check whether a data file is already sorted without
//! writing output. Independently of that flag, every sort run re-checks the
//! result before reporting success.

use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use mqsort_lib::data_io::{read_values, write_values};
use mqsort_lib::logging::{OperationTimer, format_count};
use mqsort_lib::sort::parallel_sort;
use mqsort_lib::validation::validate_file_exists;

use crate::commands::command::Command;
use crate::commands::common::{TuningOptions, generate_values};

/// Sort a numeric data file.
///
/// Sorts `f64` values in non-descending order using a fixed pool of worker
/// threads coordinated through one bounded message queue.
#[derive(Debug, Parser)]
#[command(
    name = "sort",
    about = "Sort numeric data in parallel using a bounded work queue",
    long_about = r#"
Sort f64 values in non-descending order across a fixed pool of worker
threads.

The input is either a data file (one number per line, --input) or randomly
generated (--count, optionally with --seed for reproducibility).

TUNING:

  --threads           Worker thread count. More threads help on large inputs.

  --queue-capacity    Size of the shared work queue. Independent of the input
                      length: it bounds coordination memory and throttles
                      splitting once consumers fall behind (backpressure).

  --cutoff            Range length at or below which a range is sorted
                      serially by insertion sort instead of being split.

EXAMPLES:

  # Sort a data file and write the result
  mqsort sort -i data.txt -o sorted.txt

  # Sort one million random values with 8 workers
  mqsort sort -n 1000000 -t 8

  # Check whether a file is already sorted
  mqsort sort -i sorted.txt --verify
"#
)]
pub struct Sort {
    /// Input data file, one number per line (required unless --count is
    /// given).
    #[arg(short = 'i', long = "input", conflicts_with = "count", required_unless_present = "count")]
    pub input: Option<PathBuf>,

    /// Generate this many random values in [0, 1) instead of reading a file.
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    /// Output file for the sorted values (omit to sort without writing).
    #[arg(short = 'o', long = "output", conflicts_with = "verify")]
    pub output: Option<PathBuf>,

    /// Verify the input is already sorted (no sorting performed).
    ///
    /// Exits 0 if the values are in non-descending order, non-zero with the
    /// first out-of-order position otherwise.
    #[arg(long = "verify", conflicts_with = "output")]
    pub verify: bool,

    /// Seed for random value generation (with --count).
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub tuning: TuningOptions,
}

/// Returns the first index `i` with `values[i] > values[i + 1]`, if any.
fn first_unsorted_index(values: &[f64]) -> Option<usize> {
    values.windows(2).position(|window| window[0] > window[1])
}

impl Command for Sort {
    fn execute(&self) -> Result<()> {
        let mut values = match (&self.input, self.count) {
            (Some(path), None) => {
                validate_file_exists(path, "Input data")?;
                let values = read_values(path)?;
                info!("Read {} values from {}", format_count(values.len() as u64), path.display());
                values
            }
            (None, Some(count)) => {
                let values = generate_values(count, self.seed);
                info!("Generated {} random values", format_count(values.len() as u64));
                values
            }
            _ => bail!("exactly one of --input and --count must be given"),
        };

        if self.verify {
            return match first_unsorted_index(&values) {
                None => {
                    info!("Input is sorted ({} values)", format_count(values.len() as u64));
                    Ok(())
                }
                Some(i) => bail!(
                    "input is not sorted: values[{i}]={} > values[{}]={}",
                    values[i],
                    i + 1,
                    values[i + 1]
                ),
            };
        }

        let config = self.tuning.to_config();
        let timer = OperationTimer::new("Sorting");
        parallel_sort(&mut values, &config)?;
        timer.log_completion(values.len() as u64);

        if let Some(i) = first_unsorted_index(&values) {
            bail!(
                "sort verification failed: values[{i}]={} > values[{}]={}",
                values[i],
                i + 1,
                values[i + 1]
            );
        }

        if let Some(output) = &self.output {
            write_values(output, &values)?;
            info!("Wrote {} values to {}", format_count(values.len() as u64), output.display());
        }

        Ok(())
    }
}
