use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::error::{record, LastError};
use crate::{Message, QueueError, QueueFull};

/// A bounded, thread-safe FIFO queue of [`Message`]s.
///
/// Any number of producer and consumer threads may call [`put`],
/// [`fetch`], and [`fetch_wait`] concurrently on the same queue. A full
/// queue rejects `put` synchronously instead of blocking for space, so
/// producers apply their own backpressure policy; consumers either poll
/// or wait with a bounded timeout.
///
/// All shared state sits behind one mutex, held only for the O(1) push or
/// pop. The condvar releases that mutex atomically while a consumer waits,
/// so a producer's notification sent between a consumer's failed check and
/// its wait registration cannot be lost.
///
/// [`put`]: MsgQueue::put
/// [`fetch`]: MsgQueue::fetch
/// [`fetch_wait`]: MsgQueue::fetch_wait
pub struct MsgQueue {
    inner: Mutex<VecDeque<Message>>,
    available: Condvar,
    max_size: usize,
}

impl MsgQueue {
    /// Creates an empty queue holding at most `max_size` messages.
    ///
    /// A capacity of zero yields a queue that rejects every `put`.
    pub fn new(max_size: usize) -> Self {
        Self {
            inner: Mutex::new(VecDeque::with_capacity(max_size)),
            available: Condvar::new(),
            max_size,
        }
    }

    /// Attempts to insert `msg` at the newest end of the queue.
    ///
    /// Never blocks for space: if the queue already holds `max_size`
    /// messages the put fails fast and the message travels back to the
    /// caller inside the error.
    ///
    /// # Returns
    /// * `Ok(())` if the queue took ownership of the message
    /// * `Err(QueueFull)` if the queue is at capacity; `into_inner()`
    ///   recovers the message
    pub fn put(&self, msg: Message) -> Result<(), QueueFull> {
        {
            let mut inner = self.inner.lock();

            if inner.len() >= self.max_size {
                record(LastError::Full);
                return Err(QueueFull(msg));
            }

            inner.push_back(msg);
        }

        // Lock released; a waiter still inside wait_until holds it until it
        // actually sleeps, so this notification cannot slip past it.
        self.available.notify_one();

        record(LastError::None);
        Ok(())
    }

    /// Removes and returns the oldest message, without blocking.
    ///
    /// # Returns
    /// * `Ok(Message)` with ownership transferred to the caller
    /// * `Err(QueueError::Empty)` if no message is present right now
    pub fn fetch(&self) -> Result<Message, QueueError> {
        match self.inner.lock().pop_front() {
            Some(msg) => {
                record(LastError::None);
                Ok(msg)
            }
            None => {
                record(LastError::Empty);
                Err(QueueError::Empty)
            }
        }
    }

    /// Removes and returns the oldest message, waiting up to `timeout` for
    /// one to arrive.
    ///
    /// The deadline is fixed at call entry; spurious wakeups re-enter the
    /// wait with the remaining time rather than shortening the budget. A
    /// message that races in right as the deadline expires is still
    /// returned — one final check runs after the wait ends.
    ///
    /// # Returns
    /// * `Ok(Message)` if one was present or arrived within `timeout`
    /// * `Err(QueueError::TimedOut)` if the deadline passed with the queue
    ///   still empty — distinguishable from a non-blocking `Empty`
    pub fn fetch_wait(&self, timeout: Duration) -> Result<Message, QueueError> {
        let deadline = Instant::now() + timeout;
        let mut inner = self.inner.lock();

        loop {
            if let Some(msg) = inner.pop_front() {
                record(LastError::None);
                return Ok(msg);
            }

            if self.available.wait_until(&mut inner, deadline).timed_out() {
                // Final check: data may have arrived with the deadline.
                return match inner.pop_front() {
                    Some(msg) => {
                        record(LastError::None);
                        Ok(msg)
                    }
                    None => {
                        record(LastError::TimedOut);
                        Err(QueueError::TimedOut)
                    }
                };
            }
        }
    }

    /// Returns the number of messages currently enqueued.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no messages are enqueued.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the fixed capacity set at construction.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl std::fmt::Debug for MsgQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MsgQueue")
            .field("len", &self.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}
