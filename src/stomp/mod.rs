//! The `stomp` module implements the STOMP 1.2 frame model used on the wire.
//!
//! The broker speaks STOMP framed over WebSocket: each WebSocket text
//! message carries exactly one frame. A frame is a command line, a set of
//! `name:value` header lines, a blank line, and the body, terminated by a
//! NUL byte.

mod frame;

pub use frame::{Command, Frame};
