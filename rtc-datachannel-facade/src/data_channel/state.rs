use std::fmt;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";

/// Lifecycle state of a data channel.
///
/// The state only ever advances:
///
/// ```text
/// Connecting → Open → Closing → Closed
/// Connecting → Closed
/// Open → Closed
/// ```
///
/// `Closed` is terminal; once reached, no further transition happens and no
/// further close-triggered event fires.
///
/// # Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#dom-rtcdatachannelstate)
/// * [MDN](https://developer.mozilla.org/en-US/docs/Web/API/RTCDataChannel/readyState)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCDataChannelState {
    /// State not specified. This should not occur in normal operation.
    #[default]
    Unspecified,

    /// The channel is being established and is not yet ready to carry
    /// traffic.
    Connecting,

    /// The channel is established and `send` calls are forwarded to the
    /// transport.
    Open,

    /// Teardown has started, either by a local `close()` call or because
    /// the transport reported an unrequested close.
    Closing,

    /// The channel is fully torn down. Terminal.
    Closed,
}

const DATA_CHANNEL_STATE_CONNECTING_STR: &str = "connecting";
const DATA_CHANNEL_STATE_OPEN_STR: &str = "open";
const DATA_CHANNEL_STATE_CLOSING_STR: &str = "closing";
const DATA_CHANNEL_STATE_CLOSED_STR: &str = "closed";

impl From<&str> for RTCDataChannelState {
    fn from(raw: &str) -> Self {
        match raw {
            DATA_CHANNEL_STATE_CONNECTING_STR => RTCDataChannelState::Connecting,
            DATA_CHANNEL_STATE_OPEN_STR => RTCDataChannelState::Open,
            DATA_CHANNEL_STATE_CLOSING_STR => RTCDataChannelState::Closing,
            DATA_CHANNEL_STATE_CLOSED_STR => RTCDataChannelState::Closed,
            _ => RTCDataChannelState::Unspecified,
        }
    }
}

impl From<u8> for RTCDataChannelState {
    fn from(v: u8) -> Self {
        match v {
            1 => RTCDataChannelState::Connecting,
            2 => RTCDataChannelState::Open,
            3 => RTCDataChannelState::Closing,
            4 => RTCDataChannelState::Closed,
            _ => RTCDataChannelState::Unspecified,
        }
    }
}

impl fmt::Display for RTCDataChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCDataChannelState::Connecting => DATA_CHANNEL_STATE_CONNECTING_STR,
            RTCDataChannelState::Open => DATA_CHANNEL_STATE_OPEN_STR,
            RTCDataChannelState::Closing => DATA_CHANNEL_STATE_CLOSING_STR,
            RTCDataChannelState::Closed => DATA_CHANNEL_STATE_CLOSED_STR,
            RTCDataChannelState::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
