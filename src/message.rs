/// An owned, fixed-length byte payload exchanged through a [`MsgQueue`].
///
/// A message has exactly one owner at all times: the thread that built it,
/// the queue while it is enqueued, or the thread that fetched it. Handing a
/// message to [`MsgQueue::put`] moves it; a rejected `put` moves it back.
///
/// The payload is immutable after construction.
///
/// [`MsgQueue`]: crate::MsgQueue
/// [`MsgQueue::put`]: crate::MsgQueue::put
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    payload: Box<[u8]>,
}

impl Message {
    /// Creates a message by copying `bytes` into freshly allocated storage.
    ///
    /// The source slice is not consumed; use `Message::from(vec)` to move an
    /// existing buffer in without copying.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            payload: bytes.into(),
        }
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns `true` if the payload is zero-length.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Returns the payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consumes the message, returning the owned payload.
    pub fn into_payload(self) -> Box<[u8]> {
        self.payload
    }
}

impl From<Vec<u8>> for Message {
    fn from(payload: Vec<u8>) -> Self {
        Self {
            payload: payload.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}
