//! # uci-diag
//!
//! `uci-diag` is a pair of standalone diagnostic utilities for a
//! message-bus-based SAR ATR pipeline. Both are thin STOMP-over-WebSocket
//! clients of the broker: a mock publisher that emits `FileLocation_uci`
//! file-location notifications, and a listener that subscribes to result
//! topics and pretty-prints incoming messages.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `client`: The broker session: WebSocket connect, STOMP handshake, subscribe, send, receive.
//! - `config`: Handles loading the per-tool YAML configuration.
//! - `listener`: Subscribes to result topics and reports each received message.
//! - `publisher`: Discovers NITF files and publishes file-location envelopes.
//! - `stomp`: The STOMP 1.2 frame model and codec.
//! - `utils`: Contains shared utilities, such as error handling.

pub mod client;
pub mod config;
pub mod listener;
pub mod publisher;
pub mod stomp;
pub mod utils;
