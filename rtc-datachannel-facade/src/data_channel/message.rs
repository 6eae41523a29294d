use crate::transport::BufferView;
use bytes::Bytes;

/// An opaque binary payload whose bytes are not available synchronously.
///
/// Sending a `Blob` reads its bytes out on a deferred tick before the
/// binary send primitive runs, so the actual transmission can land after
/// the channel has already left the open state.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Blob { data: data.into() }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.data
    }

    pub(crate) fn into_bytes(self) -> Bytes {
        self.data
    }
}

/// Outbound payload accepted by [`RTCDataChannel::send`].
///
/// [`RTCDataChannel::send`]: crate::data_channel::RTCDataChannel::send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RTCDataChannelPayload {
    /// UTF-8 text, forwarded to the transport's text-send primitive
    /// unmodified.
    Text(String),

    /// Blob-like payload; bytes are read out on a deferred tick.
    Blob(Blob),

    /// Fixed-size binary buffer, forwarded synchronously.
    Buffer(Bytes),

    /// View over a backing buffer; normalized to its byte range before
    /// forwarding.
    BufferView(BufferView),
}

impl From<String> for RTCDataChannelPayload {
    fn from(text: String) -> Self {
        RTCDataChannelPayload::Text(text)
    }
}

impl From<&str> for RTCDataChannelPayload {
    fn from(text: &str) -> Self {
        RTCDataChannelPayload::Text(text.to_owned())
    }
}

impl From<Blob> for RTCDataChannelPayload {
    fn from(blob: Blob) -> Self {
        RTCDataChannelPayload::Blob(blob)
    }
}

impl From<Bytes> for RTCDataChannelPayload {
    fn from(data: Bytes) -> Self {
        RTCDataChannelPayload::Buffer(data)
    }
}

impl From<BufferView> for RTCDataChannelPayload {
    fn from(view: BufferView) -> Self {
        RTCDataChannelPayload::BufferView(view)
    }
}

/// RTCDataChannelMessage represents a message received from the data
/// channel, after the channel's binary-type translation has been applied
/// to the transport payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RTCDataChannelMessage {
    /// Text payload, passed through unchanged.
    Text(String),

    /// Binary payload surfaced blob-like: a copy of exactly the bytes that
    /// were received.
    Blob(Blob),

    /// Binary payload surfaced as a raw buffer. For transport views this is
    /// the whole backing buffer, not just the viewed range.
    Buffer(Bytes),
}

impl RTCDataChannelMessage {
    pub fn is_string(&self) -> bool {
        matches!(self, RTCDataChannelMessage::Text(_))
    }
}
