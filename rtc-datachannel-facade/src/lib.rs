//! # RTC DataChannel Facade
//!
//! A standards-shaped, event-driven [`RTCDataChannel`] handle over a
//! lower-level bidirectional data channel transport.
//!
//! The crate owns the channel lifecycle state machine and the
//! message-dispatch protocol: how a channel moves between connecting, open,
//! closing and closed under both user-requested and network-driven closure,
//! how outbound sends are validated and routed by payload variant, and how
//! transport callbacks are re-emitted as a consistent, ordered event stream.
//! Establishing the underlying channel (ICE/SDP negotiation, encryption,
//! congestion control) is the transport's business, behind the
//! [`DataChannelTransport`] trait.
//!
//! Everything runs on one logical thread. The only scheduling primitive is
//! the [`TaskQueue`]: work that must not run inside the current callback
//! (the deferred close request, blob byte read-outs, the completion of an
//! unrequested close) is deferred onto it, and the owner pumps the queue
//! whenever its event loop yields.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bytes::Bytes;
//! use rtc_datachannel_facade::data_channel::{RTCDataChannel, RTCDataChannelInit};
//! use rtc_datachannel_facade::error::Result;
//! use rtc_datachannel_facade::task_queue::TaskQueue;
//! use rtc_datachannel_facade::transport::{
//!     DataChannelTransport, OnBufferedAmountLowFn, OnClosedFn, OnErrorFn, OnMessageFn, OnOpenFn,
//! };
//! use std::rc::Rc;
//!
//! # struct NativeChannel; // stands in for your transport binding
//! # impl DataChannelTransport for NativeChannel {
//! #     fn is_open(&self) -> bool { false }
//! #     fn id(&self) -> u16 { 0 }
//! #     fn label(&self) -> String { "chat".to_owned() }
//! #     fn protocol(&self) -> String { String::new() }
//! #     fn buffered_amount(&self) -> usize { 0 }
//! #     fn set_buffered_amount_low_threshold(&self, _threshold: usize) {}
//! #     fn send_message(&self, _text: &str) -> Result<()> { Ok(()) }
//! #     fn send_message_binary(&self, _data: Bytes) -> Result<()> { Ok(()) }
//! #     fn close(&self) -> Result<()> { Ok(()) }
//! #     fn on_open(&self, _f: OnOpenFn) {}
//! #     fn on_closed(&self, _f: OnClosedFn) {}
//! #     fn on_error(&self, _f: OnErrorFn) {}
//! #     fn on_buffered_amount_low(&self, _f: OnBufferedAmountLowFn) {}
//! #     fn on_message(&self, _f: OnMessageFn) {}
//! # }
//! let tasks = TaskQueue::new();
//! let transport: Rc<dyn DataChannelTransport> = Rc::new(NativeChannel);
//! let dc = RTCDataChannel::new(transport, RTCDataChannelInit::default(), tasks.clone());
//!
//! dc.on_open(|| println!("channel open"));
//! dc.on_message(|msg| println!("message: {msg:?}"));
//!
//! dc.send_text("hello");
//! dc.close();
//!
//! // pump deferred work whenever the event loop yields
//! tasks.run();
//! ```
//!
//! ## Error Policy
//!
//! Delivery is permissive and best-effort, matching real-world transport
//! behavior rather than strict specification behavior: `send` and `close`
//! never return an error. A send while the channel is not open is dropped
//! (loggable through the `send_debug` configuration flag); a transport
//! failure during send is absorbed, except that a closed-transport failure
//! folds into the normal closure path. Transport-reported runtime errors
//! surface as structured `error` events, never as returned failures.
//!
//! [`RTCDataChannel`]: data_channel::RTCDataChannel
//! [`DataChannelTransport`]: transport::DataChannelTransport
//! [`TaskQueue`]: task_queue::TaskQueue

#![warn(rust_2018_idioms)]

pub mod data_channel;
pub mod error;
pub mod task_queue;
pub mod transport;
