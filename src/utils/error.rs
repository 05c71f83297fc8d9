//! The `error` module defines the error type shared by both diagnostic tools.
//!
//! Every fallible broker path in the crate surfaces a `DiagError`; the
//! binaries decide which failures are fatal (the initial connection) and
//! which are logged and survived (send failures, per-topic subscribe
//! failures). Configuration loading reports the config crate's own error
//! type directly.

use thiserror::Error;

/// Errors raised while talking to the broker.
#[derive(Debug, Error)]
pub enum DiagError {
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("broker handshake failed: {0}")]
    Handshake(String),

    #[error("connection closed by broker")]
    ConnectionClosed,

    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
