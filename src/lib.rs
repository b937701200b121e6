//! msgq — a bounded, thread-safe FIFO message queue.
//!
//! Producers hand owned byte-payload [`Message`]s to a [`MsgQueue`] with
//! [`put`], which rejects synchronously when the capacity bound is reached.
//! Consumers take the oldest message with the non-blocking [`fetch`] or
//! block with a timeout via [`fetch_wait`]. Delivery is strict FIFO among
//! successful puts; every message is delivered exactly once.
//!
//! [`put`]: MsgQueue::put
//! [`fetch`]: MsgQueue::fetch
//! [`fetch_wait`]: MsgQueue::fetch_wait

mod error;
mod message;
mod queue;

pub use error::{last_error, LastError, QueueError, QueueFull};
pub use message::Message;
pub use queue::MsgQueue;
