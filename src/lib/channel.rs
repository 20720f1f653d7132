//! Bounded blocking channel backed by a fixed-capacity circular buffer.
//!
//! This is the single coordination primitive of the parallel sort: one queue
//! shared by the coordinator and every worker, carrying work items,
//! completion reports, and the shutdown signal. Capacity is fixed at
//! construction and independent of the input size, so the channel doubles as
//! a backpressure mechanism: a blocking sender is throttled once consumers fall behind,
//! bounding memory for arbitrarily large inputs.
//!
//! # Blocking semantics
//!
//! - [`Channel::send`] blocks while the buffer is full.
//! - [`Channel::recv`] blocks while the buffer is empty.
//! - [`Channel::try_send`] never blocks; it hands the message back when the
//!   buffer is full.
//! - [`Channel::send_or_exchange`] never blocks; a full buffer trades the
//!   outgoing message for the oldest buffered one.
//!
//! Both operate under a single mutex covering the ring state (slots, cursors,
//! occupied count), with two condition variables (not-full / not-empty).
//! Waits run inside `while` loops, so spurious wakeups are harmless. The lock
//! is held for O(1) per operation; no blocking work happens while holding it.
//!
//! Delivery is strict global FIFO across all producers: messages are never
//! dropped, duplicated, or reordered.

use parking_lot::{Condvar, Mutex};

/// Circular buffer state guarded by the channel's mutex.
struct Ring<T> {
    /// Fixed-capacity backing store. A slot is `Some` iff it holds an
    /// undelivered message.
    slots: Box<[Option<T>]>,
    /// Index of the next slot to write (wraps modulo capacity).
    write: usize,
    /// Index of the next slot to read (wraps modulo capacity).
    read: usize,
    /// Number of occupied slots. Always in `0..=capacity`.
    count: usize,
}

/// A bounded multi-producer multi-consumer channel with blocking `send` and
/// `recv`.
///
/// The buffer is a circular arena addressed by wrapping cursors; callers
/// never see raw indices. `Channel` is shared across threads behind an
/// [`std::sync::Arc`].
pub struct Channel<T> {
    ring: Mutex<Ring<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    capacity: usize,
}

impl<T> Channel<T> {
    /// Creates a channel holding at most `capacity` undelivered messages.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-capacity channel could never
    /// deliver anything.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "channel capacity must be greater than zero");
        let slots = (0..capacity).map(|_| None).collect::<Vec<_>>().into_boxed_slice();
        Self {
            ring: Mutex::new(Ring { slots, write: 0, read: 0, count: 0 }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity,
        }
    }

    /// Appends a message, blocking while the buffer is full.
    ///
    /// Wakes one receiver blocked on the not-empty condition.
    pub fn send(&self, message: T) {
        let mut ring = self.ring.lock();
        while ring.count == self.capacity {
            self.not_full.wait(&mut ring);
        }

        let write = ring.write;
        debug_assert!(ring.slots[write].is_none(), "send would overwrite an unread slot");
        ring.slots[write] = Some(message);
        ring.write = (write + 1) % self.capacity;
        ring.count += 1;

        drop(ring);
        self.not_empty.notify_one();
    }

    /// Attempts to append a message without blocking.
    ///
    /// # Errors
    ///
    /// Returns the message back if the buffer is currently full.
    pub fn try_send(&self, message: T) -> Result<(), T> {
        let mut ring = self.ring.lock();
        if ring.count == self.capacity {
            return Err(message);
        }

        let write = ring.write;
        debug_assert!(ring.slots[write].is_none(), "send would overwrite an unread slot");
        ring.slots[write] = Some(message);
        ring.write = (write + 1) % self.capacity;
        ring.count += 1;

        drop(ring);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Appends a message without blocking, exchanging it for the oldest
    /// buffered message when the buffer is full.
    ///
    /// With room available this is a plain send and returns `None`. On a
    /// full buffer the oldest message is removed to make room and handed to
    /// the caller, so the operation always completes immediately. The
    /// outgoing message takes the normal tail position either way, so FIFO
    /// order is preserved.
    pub fn send_or_exchange(&self, message: T) -> Option<T> {
        let mut ring = self.ring.lock();
        let exchanged = if ring.count == self.capacity {
            let read = ring.read;
            let oldest =
                ring.slots[read].take().expect("read cursor must point at an occupied slot");
            ring.read = (read + 1) % self.capacity;
            ring.count -= 1;
            Some(oldest)
        } else {
            None
        };

        let write = ring.write;
        debug_assert!(ring.slots[write].is_none(), "send would overwrite an unread slot");
        ring.slots[write] = Some(message);
        ring.write = (write + 1) % self.capacity;
        ring.count += 1;

        drop(ring);
        self.not_empty.notify_one();
        exchanged
    }

    /// Removes and returns the oldest message, blocking while the buffer is
    /// empty.
    ///
    /// Wakes one sender blocked on the not-full condition.
    pub fn recv(&self) -> T {
        let mut ring = self.ring.lock();
        while ring.count == 0 {
            self.not_empty.wait(&mut ring);
        }

        let read = ring.read;
        let message = ring.slots[read].take().expect("read cursor must point at an occupied slot");
        ring.read = (read + 1) % self.capacity;
        ring.count -= 1;

        drop(ring);
        self.not_full.notify_one();
        message
    }

    /// Number of undelivered messages currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.lock().count
    }

    /// True if no message is currently buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of undelivered messages the channel can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
