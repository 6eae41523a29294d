use crate::data_channel::message::RTCDataChannelMessage;
use std::cell::RefCell;
use std::fmt;

/// Error value carried by the channel's `error` event.
///
/// Transport-reported runtime failures surface here instead of as returned
/// errors; they do not change the channel's lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RTCError {
    pub error_detail: RTCErrorDetailType,
    pub message: String,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCErrorDetailType {
    #[default]
    DataChannelFailure,
}

const ERROR_DETAIL_DATA_CHANNEL_FAILURE_STR: &str = "data-channel-failure";

impl fmt::Display for RTCErrorDetailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCErrorDetailType::DataChannelFailure => ERROR_DETAIL_DATA_CHANNEL_FAILURE_STR,
        };
        write!(f, "{s}")
    }
}

/// One event category's subscribers: an ordered broadcast list plus one
/// optional single-slot handler.
///
/// Every emission invokes the broadcast listeners in registration order
/// first, then the single-slot handler if one is set.
pub(crate) struct EventDispatcher<T> {
    listeners: RefCell<Vec<Box<dyn FnMut(&T)>>>,
    handler: RefCell<Option<Box<dyn FnMut(&T)>>>,
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        EventDispatcher {
            listeners: RefCell::new(Vec::new()),
            handler: RefCell::new(None),
        }
    }
}

impl<T> EventDispatcher<T> {
    pub(crate) fn add_listener(&self, f: Box<dyn FnMut(&T)>) {
        self.listeners.borrow_mut().push(f);
    }

    /// Replaces the single-slot handler.
    pub(crate) fn set_handler(&self, f: Box<dyn FnMut(&T)>) {
        *self.handler.borrow_mut() = Some(f);
    }

    pub(crate) fn emit(&self, value: &T) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(value);
        }
        if let Some(handler) = self.handler.borrow_mut().as_mut() {
            handler(value);
        }
    }
}

/// The six event categories of a data channel.
#[derive(Default)]
pub(crate) struct DataChannelEvents {
    pub(crate) open: EventDispatcher<()>,
    pub(crate) message: EventDispatcher<RTCDataChannelMessage>,
    pub(crate) error: EventDispatcher<RTCError>,
    pub(crate) close: EventDispatcher<()>,
    pub(crate) closing: EventDispatcher<()>,
    pub(crate) buffered_amount_low: EventDispatcher<()>,
}
