//! Parallel quicksort over a single shared bounded channel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  Work/Finish/Shutdown  ┌─────────────┐
//! │ Coordinator │──────────────────────> │   Channel   │
//! │ (caller's   │ <──────────────────────│  (bounded,  │
//! │  thread)    │                        │   FIFO)     │
//! └─────────────┘                        └──────┬──────┘
//!                                          ▲    │
//!                                 Work x2 /│    ▼ recv
//!                                 Finish   │  ┌─────────────┐
//!                                 Shutdown └──│  Worker x T │
//!                                             └─────────────┘
//! ```
//!
//! Recursion is expressed as message re-submission, not call-stack recursion:
//! a worker that partitions a range sends the two halves back into the
//! channel, where any worker (possibly itself) will pick them up. This is
//! what spreads the divide-and-conquer tree across threads.
//!
//! Because every participant shares one channel, workers also dequeue
//! messages that are not addressed to them. A worker that dequeues a
//! `Finish` report forwards it unchanged for the coordinator to consume; a
//! worker that dequeues `Shutdown` forwards it exactly once before exiting,
//! so a single broadcast circulates until every worker has seen it
//! (hot-potato shutdown).
//!
//! # Backpressure
//!
//! The channel's capacity is fixed and independent of the input size, so the
//! split frontier of a large array can outgrow it. Blocking producers would
//! then jam: every participant could end up waiting for queue space that
//! only another waiting participant could free. Instead, nothing ever blocks
//! on a full queue. A worker defers an unsendable split to a local stack and
//! sorts it itself, and forwarded reports and coordinator re-injections swap
//! atomically with the queue's oldest message. The queue stays bounded, and
//! whoever holds a message can always make progress.
//!
//! # Termination detection
//!
//! Every split produces two sub-ranges that exactly cover their parent, so
//! the lengths of all `Finish` reports sum to the array length exactly once.
//! The coordinator accumulates them and stops reading when the sum reaches
//! the array length. No global barrier is needed.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::channel::Channel;
use crate::errors::{MqsortError, Result};
use crate::sort::message::{Message, Span};
use crate::sort::partition::{insertion_sort, partition};
use crate::validation::validate_at_least_one;

/// Default number of worker threads.
pub const DEFAULT_THREADS: usize = 4;

/// Default capacity of the shared message queue. Independent of the array
/// length: it bounds memory and throttles producers via backpressure.
pub const DEFAULT_QUEUE_CAPACITY: usize = 50;

/// Default range length at or below which a range is insertion-sorted
/// in place instead of being split further.
pub const DEFAULT_CUTOFF: usize = 10;

/// Tunables for [`parallel_sort`].
#[derive(Debug, Clone)]
pub struct ParallelSortConfig {
    /// Number of worker threads (>= 1).
    pub threads: usize,
    /// Message queue capacity (>= 1). Larger values reduce producer
    /// blocking; smaller values bound memory more tightly.
    pub queue_capacity: usize,
    /// Insertion-sort cutoff (>= 1). Trades splitting overhead against
    /// serial-sort efficiency on small ranges.
    pub cutoff: usize,
}

impl Default for ParallelSortConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl ParallelSortConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any tunable is zero.
    pub fn validate(&self) -> Result<()> {
        validate_at_least_one("threads", self.threads)?;
        validate_at_least_one("queue-capacity", self.queue_capacity)?;
        validate_at_least_one("cutoff", self.cutoff)?;
        Ok(())
    }
}

/// Shared non-owning view of the array being sorted.
///
/// Workers concurrently mutate sub-slices of one array. The borrow checker
/// cannot see that the spans handed to workers are pairwise disjoint (that is
/// a protocol invariant, upheld by [`Span::split_at`] producing
/// non-overlapping halves and by every `Work` message being consumed exactly
/// once), so the view is a raw pointer and each dereference is an explicit
/// unsafe site.
#[derive(Clone, Copy)]
struct SharedSlice {
    ptr: *mut f64,
    len: usize,
}

// SAFETY: workers only touch pairwise-disjoint spans of the array (see the
// struct docs), and the array outlives all workers because `parallel_sort`
// joins them before returning.
unsafe impl Send for SharedSlice {}
unsafe impl Sync for SharedSlice {}

impl SharedSlice {
    fn new(values: &mut [f64]) -> Self {
        Self { ptr: values.as_mut_ptr(), len: values.len() }
    }

    /// Reborrows the sub-slice covered by `span`.
    ///
    /// # Safety
    ///
    /// The caller must hold the only in-flight `Work` message for `span` (or
    /// a span containing it), so no other thread can alias these elements.
    #[allow(clippy::mut_from_ref)]
    unsafe fn span_mut(&self, span: Span) -> &mut [f64] {
        debug_assert!(span.end <= self.len, "span out of bounds");
        // SAFETY: bounds checked above; disjointness guaranteed by the
        // caller per the function contract.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.add(span.start), span.len()) }
    }
}

/// Per-thread message dispatch loop.
///
/// Exits only after receiving (and forwarding) `Shutdown`.
///
/// Workers never block sending into a full queue. A split that does not fit
/// is deferred to a local stack and drained by this worker; a forwarded
/// report is exchanged for the queue's oldest message. The only blocking
/// point is `recv` on an empty queue, where the worker holds no messages at
/// all, so no cycle of participants can end up waiting on queue space that
/// only another waiting participant could free.
fn worker_loop(array: SharedSlice, channel: &Channel<Message>, cutoff: usize) {
    // Splits that did not fit into the full queue, drained newest-first so
    // the pile stays shallow, like a recursion stack.
    let mut deferred: Vec<Span> = Vec::new();
    // Message obtained from a full-queue exchange; handled before anything
    // else is taken.
    let mut pending: Option<Message> = None;
    loop {
        let message = match pending.take() {
            Some(message) => message,
            None => match deferred.pop() {
                Some(span) => Message::Work(span),
                // Blocking here means the queue is empty and this worker
                // holds nothing, i.e. it is genuinely idle.
                None => channel.recv(),
            },
        };

        match message {
            Message::Work(span) => {
                if span.len() <= cutoff {
                    // SAFETY: this worker holds the only Work item covering
                    // `span`; no other thread touches these elements.
                    let chunk = unsafe { array.span_mut(span) };
                    insertion_sort(chunk);
                    pending = channel.send_or_exchange(Message::Finish(span));
                } else {
                    // SAFETY: as above.
                    let chunk = unsafe { array.span_mut(span) };
                    let split = partition(chunk);
                    // The halves exactly cover `span`: no gap, no overlap.
                    let (left, right) = span.split_at(span.start + split);
                    offer_split(channel, &mut deferred, left);
                    offer_split(channel, &mut deferred, right);
                }
            }
            // Completion reports belong to the coordinator. Forwarding must
            // neither block (the queue may be full) nor hold the report back
            // (the coordinator may be waiting on exactly this one), so a
            // full queue trades the report for its oldest message.
            Message::Finish(span) => {
                pending = channel.send_or_exchange(Message::Finish(span));
            }
            Message::Shutdown => {
                debug_assert!(
                    deferred.is_empty(),
                    "shutdown arrives only after every range is finished"
                );
                // Forward exactly once so the broadcast reaches the other
                // workers, then exit. Shutdown circulates only after every
                // element is accounted for, so a message exchanged out here
                // can only be a zero-length report that nobody consumes.
                let _ = channel.send_or_exchange(Message::Shutdown);
                break;
            }
        }
    }
}

/// Hands a split to the queue, or defers it locally when the queue is full.
fn offer_split(channel: &Channel<Message>, deferred: &mut Vec<Span>, span: Span) {
    if channel.try_send(Message::Work(span)).is_err() {
        deferred.push(span);
    }
}

/// Sorts `values` in non-descending order using `config.threads` workers.
///
/// Blocks until the array is fully sorted and every worker has exited. The
/// calling thread acts as the coordinator: it seeds the initial work item,
/// drains completion reports (re-injecting messages it does not own),
/// detects completion, and broadcasts shutdown.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a worker thread
/// cannot be spawned. A spawn failure never leaves a partially running pool:
/// already-started workers are shut down and joined before the error is
/// returned.
pub fn parallel_sort(values: &mut [f64], config: &ParallelSortConfig) -> Result<()> {
    config.validate()?;

    let total = values.len();
    let channel = Arc::new(Channel::with_capacity(config.queue_capacity));
    let shared = SharedSlice::new(values);
    let cutoff = config.cutoff;

    let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(config.threads);
    for index in 0..config.threads {
        let worker_channel = Arc::clone(&channel);
        let spawned = thread::Builder::new()
            .name(format!("mqsort-worker-{index}"))
            .spawn(move || worker_loop(shared, &worker_channel, cutoff));
        match spawned {
            Ok(handle) => workers.push(handle),
            Err(source) => {
                shutdown(&channel, workers);
                return Err(MqsortError::WorkerSpawn { index, source });
            }
        }
    }

    // Seed the full array as the first work item. An empty array still gets
    // its (empty) seed so the protocol is uniform; the completion loop below
    // simply never runs for it.
    channel.send(Message::Work(Span::new(0, total)));

    let mut completed = 0usize;
    // A dequeued Work item is not ours to consume; it is re-injected at the
    // tail for the workers. Re-injection into a full queue exchanges the
    // item for the oldest message, so the coordinator never blocks on send
    // and keeps draining reports even when the queue is saturated.
    let mut outstanding: Option<Message> = None;
    while completed < total {
        let message = match outstanding.take() {
            Some(reinjected) => match channel.send_or_exchange(reinjected) {
                Some(exchanged) => exchanged,
                None => channel.recv(),
            },
            None => channel.recv(),
        };
        match message {
            Message::Finish(span) => completed += span.len(),
            other => outstanding = Some(other),
        }
    }
    debug_assert_eq!(completed, total, "finish reports must cover the array exactly once");

    shutdown(&channel, workers);
    Ok(())
}

/// Broadcasts one `Shutdown` and joins every worker.
fn shutdown(channel: &Channel<Message>, workers: Vec<JoinHandle<()>>) {
    if workers.is_empty() {
        return;
    }
    channel.send(Message::Shutdown);
    for worker in workers {
        if worker.join().is_err() {
            log::error!("Sort worker thread panicked");
        }
    }
}
