use crate::error::{Error, Result};
use bytes::Bytes;

pub type OnOpenFn = Box<dyn FnMut()>;
pub type OnClosedFn = Box<dyn FnMut()>;
pub type OnErrorFn = Box<dyn FnMut(String)>;
pub type OnBufferedAmountLowFn = Box<dyn FnMut()>;
pub type OnMessageFn = Box<dyn FnMut(TransportPayload)>;

/// A byte range over a larger backing buffer, as delivered by transports
/// that hand out windows into a receive buffer rather than owned copies.
///
/// `bytes()` yields the viewed range; `into_buffer()` yields the whole
/// backing buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferView {
    buffer: Bytes,
    offset: usize,
    len: usize,
}

impl BufferView {
    pub fn new(buffer: Bytes, offset: usize, len: usize) -> Result<Self> {
        if offset.checked_add(len).is_none_or(|end| end > buffer.len()) {
            return Err(Error::ErrBufferViewOutOfRange);
        }
        Ok(BufferView {
            buffer,
            offset,
            len,
        })
    }

    /// The viewed byte range, without the rest of the backing buffer.
    pub fn bytes(&self) -> Bytes {
        self.buffer.slice(self.offset..self.offset + self.len)
    }

    /// The whole backing buffer.
    pub fn into_buffer(self) -> Bytes {
        self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<Bytes> for BufferView {
    /// A view covering `buffer` in full.
    fn from(buffer: Bytes) -> Self {
        let len = buffer.len();
        BufferView {
            buffer,
            offset: 0,
            len,
        }
    }
}

/// Payload delivered by the transport's message callback, before the
/// channel's binary-type translation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportPayload {
    Text(String),
    Buffer(Bytes),
    View(BufferView),
}

/// Contract of the underlying bidirectional data channel the facade wraps.
///
/// Implementations are external to this crate (a native channel binding, a
/// loopback, a test double). The facade treats the handle as shared and
/// non-owning: resource teardown belongs to whichever component created the
/// transport.
///
/// Callback registration is single-shot per category: registering again
/// replaces the previous handler. Each registered handler may fire any
/// number of times. All callbacks are delivered on the single logical
/// thread the channel lives on.
pub trait DataChannelTransport {
    /// Whether the underlying channel is currently open for traffic.
    fn is_open(&self) -> bool;

    /// Stream identifier assigned by the transport.
    fn id(&self) -> u16;

    fn label(&self) -> String;

    fn protocol(&self) -> String;

    /// Number of bytes queued for transmission and not yet handed to the
    /// network.
    fn buffered_amount(&self) -> usize;

    fn set_buffered_amount_low_threshold(&self, threshold: usize);

    /// Sends a text message. Fails with [`Error::ErrDataChannelClosed`] if
    /// the channel has already been torn down underneath the caller.
    ///
    /// [`Error::ErrDataChannelClosed`]: crate::error::Error::ErrDataChannelClosed
    fn send_message(&self, text: &str) -> Result<()>;

    /// Sends a binary message. Same failure contract as
    /// [`send_message`](DataChannelTransport::send_message).
    fn send_message_binary(&self, data: Bytes) -> Result<()>;

    /// Requests teardown of the underlying channel. Completion is reported
    /// through the closed callback, not the return value.
    fn close(&self) -> Result<()>;

    fn on_open(&self, f: OnOpenFn);

    fn on_closed(&self, f: OnClosedFn);

    fn on_error(&self, f: OnErrorFn);

    fn on_buffered_amount_low(&self, f: OnBufferedAmountLowFn);

    fn on_message(&self, f: OnMessageFn);
}
