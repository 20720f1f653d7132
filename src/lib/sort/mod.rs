//! Message-driven parallel quicksort.
//!
//! The sort is split into three layers:
//!
//! - [`message`]: the [`Span`] and [`Message`] types flowing through the
//!   shared channel.
//! - [`partition`]: the serial kernels: insertion sort below the cutoff,
//!   median-of-three partitioning above it.
//! - [`parallel`]: the worker loop, the coordinator, and the
//!   [`parallel_sort`] entry point.

pub mod message;
pub mod parallel;
pub mod partition;

pub use message::{Message, Span};
pub use parallel::{
    DEFAULT_CUTOFF, DEFAULT_QUEUE_CAPACITY, DEFAULT_THREADS, ParallelSortConfig, parallel_sort,
};
