/// RTCDataChannelInit can be used to configure properties of the underlying
/// channel such as data reliability.
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#dom-rtcdatachannelinit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RTCDataChannelInit {
    /// ordered indicates if data is allowed to be delivered out of order. The
    /// default value of true, guarantees that data will be delivered in order.
    pub ordered: bool,

    /// max_packet_life_time limits the time (in milliseconds) during which the
    /// channel will transmit or retransmit data if not acknowledged.
    pub max_packet_life_time: Option<u16>,

    /// max_retransmits limits the number of times a channel will retransmit data
    /// if not successfully delivered.
    pub max_retransmits: Option<u16>,

    /// negotiated describes if the data channel was negotiated by the
    /// application (true) or announced in-band (false).
    pub negotiated: bool,

    /// send_debug routes dropped and failed sends to the `log` facade at
    /// debug level. Off by default: a send that cannot be performed is
    /// otherwise absorbed without a trace, matching the permissive delivery
    /// semantics of the channel.
    pub send_debug: bool,
}

impl Default for RTCDataChannelInit {
    fn default() -> Self {
        RTCDataChannelInit {
            ordered: true,
            max_packet_life_time: None,
            max_retransmits: None,
            negotiated: false,
            send_debug: false,
        }
    }
}
