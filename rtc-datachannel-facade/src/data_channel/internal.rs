use crate::data_channel::event::{DataChannelEvents, RTCError, RTCErrorDetailType};
use crate::data_channel::init::RTCDataChannelInit;
use crate::data_channel::message::{Blob, RTCDataChannelMessage};
use crate::data_channel::state::RTCDataChannelState;
use crate::data_channel::{BinaryType, RTCDataChannelId};
use crate::error::{Error, Result};
use crate::task_queue::TaskQueue;
use crate::transport::{DataChannelTransport, TransportPayload};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;

/// State shared between the public handle and the transport callbacks.
///
/// Everything lives on one logical thread; lifecycle fields are plain
/// `Cell`s and event dispatch happens with no borrows held, so a listener
/// may freely call back into the channel.
pub(crate) struct RTCDataChannelInternal {
    pub(crate) id: RTCDataChannelId,
    pub(crate) label: String,
    pub(crate) protocol: String,
    pub(crate) ordered: bool,
    pub(crate) max_packet_life_time: Option<u16>,
    pub(crate) max_retransmits: Option<u16>,
    pub(crate) negotiated: bool,
    pub(crate) send_debug: bool,

    pub(crate) ready_state: Cell<RTCDataChannelState>,
    pub(crate) close_requested: Cell<bool>,
    pub(crate) binary_type: Cell<BinaryType>,
    pub(crate) buffered_amount_low_threshold: Cell<usize>,

    pub(crate) events: DataChannelEvents,
    pub(crate) transport: Rc<dyn DataChannelTransport>,
    pub(crate) tasks: TaskQueue,
}

impl RTCDataChannelInternal {
    /// Snapshots the immutable channel properties and subscribes to the
    /// transport. Called exactly once per channel, so each transport
    /// category ends up with exactly one registered handler.
    pub(crate) fn new(
        transport: Rc<dyn DataChannelTransport>,
        init: RTCDataChannelInit,
        tasks: TaskQueue,
    ) -> Rc<Self> {
        let ready_state = if transport.is_open() {
            RTCDataChannelState::Open
        } else {
            RTCDataChannelState::Connecting
        };

        let internal = Rc::new(RTCDataChannelInternal {
            id: transport.id(),
            label: transport.label(),
            protocol: transport.protocol(),
            ordered: init.ordered,
            max_packet_life_time: init.max_packet_life_time,
            max_retransmits: init.max_retransmits,
            negotiated: init.negotiated,
            send_debug: init.send_debug,
            ready_state: Cell::new(ready_state),
            close_requested: Cell::new(false),
            binary_type: Cell::new(BinaryType::default()),
            buffered_amount_low_threshold: Cell::new(0),
            events: DataChannelEvents::default(),
            transport: Rc::clone(&transport),
            tasks,
        });

        internal.subscribe();
        internal
    }

    /// Forwards the five transport event categories into the channel. The
    /// callbacks hold `Weak` back references: a dropped channel degrades
    /// them to no-ops instead of keeping the facade alive through the
    /// externally-owned transport.
    fn subscribe(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.transport.on_open(Box::new(move || {
            if let Some(internal) = weak.upgrade() {
                internal.handle_open();
            }
        }));

        let weak = Rc::downgrade(self);
        self.transport.on_closed(Box::new(move || {
            if let Some(internal) = weak.upgrade() {
                internal.handle_closed();
            }
        }));

        let weak = Rc::downgrade(self);
        self.transport.on_error(Box::new(move |message| {
            if let Some(internal) = weak.upgrade() {
                internal.handle_error(message);
            }
        }));

        let weak = Rc::downgrade(self);
        self.transport.on_buffered_amount_low(Box::new(move || {
            if let Some(internal) = weak.upgrade() {
                internal.handle_buffered_amount_low();
            }
        }));

        let weak = Rc::downgrade(self);
        self.transport.on_message(Box::new(move |payload| {
            if let Some(internal) = weak.upgrade() {
                internal.handle_message(payload);
            }
        }));
    }

    fn handle_open(&self) {
        if self.ready_state.get() != RTCDataChannelState::Connecting {
            return;
        }
        self.ready_state.set(RTCDataChannelState::Open);
        self.events.open.emit(&());
    }

    fn handle_closed(self: Rc<Self>) {
        if self.ready_state.get() == RTCDataChannelState::Closed {
            return;
        }

        if self.close_requested.get() {
            // locally requested teardown: the closing transition already
            // happened in close(), confirm with a synchronous close event
            self.ready_state.set(RTCDataChannelState::Closed);
            self.events.close.emit(&());
            return;
        }

        // unrequested teardown (network failure, peer reset): emit closing
        // now and finish on the next tick, re-reading the state there so a
        // transition to closed that lands in between is not double-fired
        self.ready_state.set(RTCDataChannelState::Closing);
        self.events.closing.emit(&());

        let weak = Rc::downgrade(&self);
        self.tasks.defer(move || {
            if let Some(internal) = weak.upgrade() {
                internal.transition_to_closed();
            }
        });
    }

    fn handle_error(&self, message: String) {
        self.events.error.emit(&RTCError {
            error_detail: RTCErrorDetailType::DataChannelFailure,
            message,
        });
    }

    fn handle_buffered_amount_low(&self) {
        self.events.buffered_amount_low.emit(&());
    }

    fn handle_message(&self, payload: TransportPayload) {
        let message = match payload {
            TransportPayload::Text(text) => RTCDataChannelMessage::Text(text),
            TransportPayload::Buffer(data) => RTCDataChannelMessage::Buffer(data),
            TransportPayload::View(view) => match self.binary_type.get() {
                BinaryType::ArrayBuffer => RTCDataChannelMessage::Buffer(view.into_buffer()),
                BinaryType::Blob => RTCDataChannelMessage::Blob(Blob::new(view.bytes())),
            },
        };
        self.events.message.emit(&message);
    }

    /// Moves to closed and emits the close event, unless already closed.
    pub(crate) fn transition_to_closed(&self) {
        if self.ready_state.get() == RTCDataChannelState::Closed {
            return;
        }
        self.ready_state.set(RTCDataChannelState::Closed);
        self.events.close.emit(&());
    }

    /// Outcome handling for a transport send. A closed-channel failure is
    /// folded into the normal closure path; everything else is absorbed so
    /// the caller of `send` never sees a failure.
    pub(crate) fn absorb_send_failure(&self, result: Result<()>) {
        match result {
            Ok(()) => {}
            Err(Error::ErrDataChannelClosed) => {
                self.transition_to_closed();
                if self.send_debug {
                    debug!(
                        "send on data channel {}: transport already closed",
                        self.id
                    );
                }
            }
            Err(err) => {
                if self.send_debug {
                    debug!("send on data channel {} failed: {err}", self.id);
                }
            }
        }
    }

}
