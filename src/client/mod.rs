//! The `client` module owns the live broker session.
//!
//! A `BrokerSession` wraps a WebSocket connection to the broker and speaks
//! STOMP over it: connect and handshake, subscribe, send, and a receive
//! loop that surfaces `MESSAGE` and `ERROR` frames as `SessionEvent`s.

mod session;

pub use session::{BrokerSession, SessionEvent};
