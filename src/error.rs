use std::cell::Cell;
use std::fmt;

use crate::Message;

/// Failure modes of the non-blocking and blocking fetch operations.
///
/// `Empty` and `TimedOut` are distinct on purpose: a polling loop that sees
/// `Empty` knows nothing was present right now, while `TimedOut` means
/// nothing arrived within the caller's whole wait budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue held no message at the time of the check.
    Empty,
    /// The wait deadline passed without a message arriving.
    TimedOut,
}

impl QueueError {
    /// Stable diagnostic token for this error.
    pub fn name(&self) -> &'static str {
        match self {
            QueueError::Empty => "QUEUE_IS_EMPTY",
            QueueError::TimedOut => "TIMED_OUT",
        }
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::TimedOut => write!(f, "timed out waiting for a message"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Rejection returned by [`MsgQueue::put`] when the queue is at capacity.
///
/// Carries the rejected message back to the caller, who decides whether to
/// retry, drop, or keep it. Put never blocks for space.
///
/// [`MsgQueue::put`]: crate::MsgQueue::put
#[derive(Debug)]
pub struct QueueFull(pub Message);

impl QueueFull {
    /// Stable diagnostic token for this error.
    pub fn name(&self) -> &'static str {
        "QUEUE_IS_FULL"
    }

    /// Recovers the rejected message.
    pub fn into_inner(self) -> Message {
        self.0
    }
}

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full ({} byte message rejected)", self.0.len())
    }
}

impl std::error::Error for QueueFull {}

/// Outcome of the calling thread's most recent queue operation.
///
/// Advisory only: the `Result` each operation returns is authoritative for
/// control flow. This mirrors the per-thread errno surface of classic C
/// queue APIs for callers that want it in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastError {
    #[default]
    None,
    Full,
    Empty,
    TimedOut,
}

impl LastError {
    /// Stable diagnostic token for this value.
    pub fn name(&self) -> &'static str {
        match self {
            LastError::None => "NONE",
            LastError::Full => "QUEUE_IS_FULL",
            LastError::Empty => "QUEUE_IS_EMPTY",
            LastError::TimedOut => "TIMED_OUT",
        }
    }
}

impl fmt::Display for LastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

thread_local! {
    static LAST_ERROR: Cell<LastError> = const { Cell::new(LastError::None) };
}

/// Returns the outcome recorded by this thread's most recent queue
/// operation. Other threads' operations never affect this value.
pub fn last_error() -> LastError {
    LAST_ERROR.get()
}

pub(crate) fn record(err: LastError) {
    LAST_ERROR.set(err);
}
