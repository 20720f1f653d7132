//! Common CLI options shared across commands.
//!
//! Shared argument structures composed into command structs with
//! `#[command(flatten)]`, plus the random-data generator used by both
//! `sort --count` and `generate`.

use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mqsort_lib::sort::{
    DEFAULT_CUTOFF, DEFAULT_QUEUE_CAPACITY, DEFAULT_THREADS, ParallelSortConfig,
};

/// Tunables for the parallel sort engine.
#[derive(Debug, Clone, Args)]
pub struct TuningOptions {
    /// Number of worker threads
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Capacity of the shared work queue (bounds memory; smaller values
    /// apply backpressure sooner)
    #[arg(long = "queue-capacity", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Range length at or below which insertion sort is used instead of
    /// further splitting
    #[arg(long = "cutoff", default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: usize,
}

impl TuningOptions {
    /// Converts the CLI options into an engine configuration.
    #[must_use]
    pub fn to_config(&self) -> ParallelSortConfig {
        ParallelSortConfig {
            threads: self.threads,
            queue_capacity: self.queue_capacity,
            cutoff: self.cutoff,
        }
    }
}

/// Generates `count` random values uniformly in `[0, 1)`.
///
/// A seed makes the output reproducible; without one the generator is seeded
/// from the OS.
#[must_use]
pub fn generate_values(count: usize, seed: Option<u64>) -> Vec<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..count).map(|_| rng.random::<f64>()).collect()
}
