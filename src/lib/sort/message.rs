//! Work-queue message types for the parallel sort.
//!
//! Every participant, the coordinator and all workers alike, communicates through
//! one shared [`Channel`](crate::channel::Channel) carrying these messages.
//! The variants give exhaustive, compiler-checked dispatch in the worker
//! loop.

/// A half-open interval `[start, end)` of array indices.
///
/// Spans identify the sub-array a message concerns. The partitioning protocol
/// only ever splits a span into two halves that exactly cover it, so spans in
/// flight are pairwise disjoint, the invariant that makes lock-free
/// concurrent mutation of the array sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index covered by the span.
    pub start: usize,
    /// One past the last index covered by the span.
    pub end: usize,
}

impl Span {
    /// Creates the span `[start, end)`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Number of indices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Splits the span at the absolute index `mid`, yielding
    /// `[start, mid)` and `[mid, end)`.
    ///
    /// The two halves exactly partition the original span: no overlap, no
    /// gap.
    #[must_use]
    pub fn split_at(&self, mid: usize) -> (Span, Span) {
        debug_assert!(self.start <= mid && mid <= self.end, "split point must lie in the span");
        (Span::new(self.start, mid), Span::new(mid, self.end))
    }
}

/// A message flowing through the shared work queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A sub-array awaiting sorting. Consumed by whichever worker dequeues
    /// it.
    Work(Span),
    /// A sub-array that has been fully sorted. Consumed only by the
    /// coordinator; workers that dequeue one forward it unchanged.
    Finish(Span),
    /// Stop signal. Each worker forwards it exactly once before exiting, so
    /// a single broadcast reaches every worker (hot-potato shutdown).
    Shutdown,
}
