
pub mod event;
pub mod init;
pub(crate) mod internal;
pub mod message;
pub mod state;

use crate::data_channel::internal::RTCDataChannelInternal;
use crate::error::{Error, Result};
use crate::task_queue::TaskQueue;
use crate::transport::DataChannelTransport;
use bytes::Bytes;
use log::{debug, warn};
use std::fmt;
use std::rc::Rc;

pub use event::{RTCError, RTCErrorDetailType};
pub use init::RTCDataChannelInit;
pub use message::{Blob, RTCDataChannelMessage, RTCDataChannelPayload};
pub use state::RTCDataChannelState;

/// Identifier for a data channel within a particular peer connection
pub type RTCDataChannelId = u16;

/// How inbound binary payloads are surfaced to the application.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryType {
    /// Binary views are copied into a [`Blob`].
    #[default]
    Blob,
    /// Binary views surface their whole backing buffer.
    ArrayBuffer,
}

const BINARY_TYPE_BLOB_STR: &str = "blob";
const BINARY_TYPE_ARRAY_BUFFER_STR: &str = "arraybuffer";

impl TryFrom<&str> for BinaryType {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        match raw {
            BINARY_TYPE_BLOB_STR => Ok(BinaryType::Blob),
            BINARY_TYPE_ARRAY_BUFFER_STR => Ok(BinaryType::ArrayBuffer),
            _ => Err(Error::ErrUnknownBinaryType(raw.to_owned())),
        }
    }
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            BinaryType::Blob => BINARY_TYPE_BLOB_STR,
            BinaryType::ArrayBuffer => BINARY_TYPE_ARRAY_BUFFER_STR,
        };
        write!(f, "{s}")
    }
}

/// DataChannel represents a WebRTC DataChannel
/// The DataChannel interface represents a network channel
/// which can be used for bidirectional peer-to-peer transfers of arbitrary data
///
/// The channel wraps an already-constructed [`DataChannelTransport`] and
/// re-emits its callbacks as a normalized, ordered event stream. Handles are
/// cheap to clone; clones share the same channel.
///
/// ## Specifications
///
/// * [MDN]
/// * [W3C]
///
/// [MDN]: https://developer.mozilla.org/en-US/docs/Web/API/RTCDataChannel
/// [W3C]: https://w3c.github.io/webrtc-pc/#dom-rtcdatachannel
#[derive(Clone)]
pub struct RTCDataChannel {
    internal: Rc<RTCDataChannelInternal>,
}

impl RTCDataChannel {
    /// Wraps `transport` and subscribes to its events.
    ///
    /// The initial state is derived from the transport at this instant:
    /// `Open` if it already reports open, `Connecting` otherwise. Deferred
    /// work (the close request, blob read-outs, the unrequested-close
    /// completion) is scheduled on `tasks`; the owner pumps that queue.
    pub fn new(
        transport: Rc<dyn DataChannelTransport>,
        init: RTCDataChannelInit,
        tasks: TaskQueue,
    ) -> Self {
        RTCDataChannel {
            internal: RTCDataChannelInternal::new(transport, init, tasks),
        }
    }

    /// label represents a label that can be used to distinguish this
    /// DataChannel object from other DataChannel objects.
    pub fn label(&self) -> &str {
        &self.internal.label
    }

    /// protocol represents the name of the sub-protocol used with this
    /// DataChannel.
    pub fn protocol(&self) -> &str {
        &self.internal.protocol
    }

    /// ID represents the ID for this DataChannel, assigned by the transport
    /// at construction.
    pub fn id(&self) -> RTCDataChannelId {
        self.internal.id
    }

    /// Ordered returns true if the DataChannel is ordered, and false if
    /// out-of-order delivery is allowed.
    pub fn ordered(&self) -> bool {
        self.internal.ordered
    }

    /// max_packet_life_time represents the length of the time window (msec)
    /// during which transmissions and retransmissions may occur in
    /// unreliable mode.
    pub fn max_packet_life_time(&self) -> Option<u16> {
        self.internal.max_packet_life_time
    }

    /// max_retransmits represents the maximum number of retransmissions that
    /// are attempted in unreliable mode.
    pub fn max_retransmits(&self) -> Option<u16> {
        self.internal.max_retransmits
    }

    /// negotiated represents whether this DataChannel was negotiated by the
    /// application (true), or not (false).
    pub fn negotiated(&self) -> bool {
        self.internal.negotiated
    }

    /// ready_state represents the state of the DataChannel object.
    pub fn ready_state(&self) -> RTCDataChannelState {
        self.internal.ready_state.get()
    }

    /// buffered_amount represents the number of bytes of application data
    /// queued in the transport and not yet transmitted. Delegates to the
    /// transport on every read.
    pub fn buffered_amount(&self) -> usize {
        self.internal.transport.buffered_amount()
    }

    /// buffered_amount_low_threshold represents the threshold at which the
    /// buffered_amount is considered to be low. The threshold is set to 0 by
    /// default.
    pub fn buffered_amount_low_threshold(&self) -> usize {
        self.internal.buffered_amount_low_threshold.get()
    }

    /// set_buffered_amount_low_threshold stores the threshold and pushes it
    /// down to the transport.
    pub fn set_buffered_amount_low_threshold(&self, threshold: usize) {
        self.internal.buffered_amount_low_threshold.set(threshold);
        self.internal
            .transport
            .set_buffered_amount_low_threshold(threshold);
    }

    pub fn binary_type(&self) -> BinaryType {
        self.internal.binary_type.get()
    }

    /// set_binary_type accepts `"blob"` or `"arraybuffer"`. Any other value
    /// fails with [`Error::ErrUnknownBinaryType`] naming the value, and the
    /// prior setting is kept.
    pub fn set_binary_type(&self, binary_type: &str) -> Result<()> {
        self.internal
            .binary_type
            .set(BinaryType::try_from(binary_type)?);
        Ok(())
    }

    /// send validates the channel state and routes `payload` to the
    /// transport by variant.
    ///
    /// A send while the channel is not open is dropped silently (logged at
    /// debug level when `send_debug` is configured); it never fails toward
    /// the caller. Transport failures are likewise absorbed, except that a
    /// closed-transport failure moves the channel to closed and emits the
    /// close event.
    pub fn send(&self, payload: impl Into<RTCDataChannelPayload>) {
        let internal = &self.internal;
        if internal.ready_state.get() != RTCDataChannelState::Open {
            if internal.send_debug {
                debug!(
                    "drop send on data channel {}: ready_state is {}",
                    internal.id,
                    internal.ready_state.get()
                );
            }
            return;
        }

        match payload.into() {
            RTCDataChannelPayload::Text(text) => {
                let result = internal.transport.send_message(&text);
                internal.absorb_send_failure(result);
            }
            RTCDataChannelPayload::Buffer(data) => {
                let result = internal.transport.send_message_binary(data);
                internal.absorb_send_failure(result);
            }
            RTCDataChannelPayload::BufferView(view) => {
                let result = internal.transport.send_message_binary(view.bytes());
                internal.absorb_send_failure(result);
            }
            RTCDataChannelPayload::Blob(blob) => {
                // blob bytes resolve on a later tick; by then the channel
                // may have left the open state, which is accepted
                let weak = Rc::downgrade(internal);
                let transport = Rc::clone(&internal.transport);
                internal.tasks.defer(move || {
                    let result = transport.send_message_binary(blob.into_bytes());
                    if let Some(internal) = weak.upgrade() {
                        internal.absorb_send_failure(result);
                    }
                });
            }
        }
    }

    /// send_text sends the text message to the DataChannel peer
    pub fn send_text(&self, text: impl Into<String>) {
        self.send(RTCDataChannelPayload::Text(text.into()));
    }

    /// send_binary sends the binary message to the DataChannel peer
    pub fn send_binary(&self, data: Bytes) {
        self.send(RTCDataChannelPayload::Buffer(data));
    }

    /// close starts cooperative teardown. Idempotent: a channel already
    /// closing or closed is left untouched.
    ///
    /// The state moves to closing immediately, without an event; the
    /// transport close request goes out on the next tick, and the close
    /// event fires once the transport confirms through its closed callback.
    pub fn close(&self) {
        let internal = &self.internal;
        let ready_state = internal.ready_state.get();
        if ready_state == RTCDataChannelState::Closing
            || ready_state == RTCDataChannelState::Closed
        {
            return;
        }

        internal.close_requested.set(true);
        internal.ready_state.set(RTCDataChannelState::Closing);

        // the request goes out on the transport even if the handle is
        // dropped before the tick runs
        let transport = Rc::clone(&internal.transport);
        let id = internal.id;
        internal.tasks.defer(move || {
            if let Err(err) = transport.close() {
                warn!("close request on data channel {id} failed: {err}");
            }
        });
    }

    /// force_close abruptly moves the channel to closed and emits the close
    /// event, without waiting on the transport's own closed notification.
    /// No-op once teardown is already underway.
    ///
    /// For an owner that must tear down immediately; normal shutdown goes
    /// through [`close`](RTCDataChannel::close).
    pub fn force_close(&self) {
        let ready_state = self.internal.ready_state.get();
        if ready_state == RTCDataChannelState::Closing
            || ready_state == RTCDataChannelState::Closed
        {
            return;
        }
        self.internal.transition_to_closed();
    }

    /// add_open_listener appends a broadcast listener for the open event.
    pub fn add_open_listener(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal.events.open.add_listener(Box::new(move |_| f()));
    }

    /// on_open sets the single-slot open handler, invoked after the
    /// broadcast listeners on every open event.
    pub fn on_open(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal.events.open.set_handler(Box::new(move |_| f()));
    }

    /// add_message_listener appends a broadcast listener for the message
    /// event.
    pub fn add_message_listener(&self, f: impl FnMut(&RTCDataChannelMessage) + 'static) {
        self.internal.events.message.add_listener(Box::new(f));
    }

    /// on_message sets the single-slot message handler.
    pub fn on_message(&self, f: impl FnMut(&RTCDataChannelMessage) + 'static) {
        self.internal.events.message.set_handler(Box::new(f));
    }

    /// add_error_listener appends a broadcast listener for the error event.
    pub fn add_error_listener(&self, f: impl FnMut(&RTCError) + 'static) {
        self.internal.events.error.add_listener(Box::new(f));
    }

    /// on_error sets the single-slot error handler.
    pub fn on_error(&self, f: impl FnMut(&RTCError) + 'static) {
        self.internal.events.error.set_handler(Box::new(f));
    }

    /// add_close_listener appends a broadcast listener for the close event.
    pub fn add_close_listener(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal
            .events
            .close
            .add_listener(Box::new(move |_| f()));
    }

    /// on_close sets the single-slot close handler.
    pub fn on_close(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal
            .events
            .close
            .set_handler(Box::new(move |_| f()));
    }

    /// add_closing_listener appends a broadcast listener for the closing
    /// event.
    pub fn add_closing_listener(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal
            .events
            .closing
            .add_listener(Box::new(move |_| f()));
    }

    /// on_closing sets the single-slot closing handler.
    pub fn on_closing(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal
            .events
            .closing
            .set_handler(Box::new(move |_| f()));
    }

    /// add_buffered_amount_low_listener appends a broadcast listener for
    /// the bufferedamountlow event.
    pub fn add_buffered_amount_low_listener(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal
            .events
            .buffered_amount_low
            .add_listener(Box::new(move |_| f()));
    }

    /// on_buffered_amount_low sets the single-slot bufferedamountlow
    /// handler.
    pub fn on_buffered_amount_low(&self, f: impl FnMut() + 'static) {
        let mut f = f;
        self.internal
            .events
            .buffered_amount_low
            .set_handler(Box::new(move |_| f()));
    }
}
