use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::stomp::{Command, Frame};
use crate::utils::error::DiagError;

/// Seconds to wait for the broker's CONNECTED acknowledgement.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// An inbound unit of delivery worth surfacing to the caller.
///
/// Handshake and receipt frames are consumed inside the session; only
/// message and error frames reach the tools.
#[derive(Debug)]
pub enum SessionEvent {
    Message(Frame),
    Error(Frame),
}

/// A single live STOMP-over-WebSocket session with the broker.
///
/// Lifecycle is connect, use, disconnect; the owning binary guarantees
/// `disconnect` runs on the interrupt path.
pub struct BrokerSession {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl BrokerSession {
    /// Dials `ws://host:port` and performs the STOMP handshake.
    pub async fn connect(host: &str, port: u16) -> Result<Self, DiagError> {
        Self::connect_with_timeout(host, port, Duration::from_secs(CONNECT_TIMEOUT_SECS)).await
    }

    /// Same as `connect`, with an explicit deadline for the broker's
    /// CONNECTED acknowledgement.
    pub async fn connect_with_timeout(
        host: &str,
        port: u16,
        handshake_timeout: Duration,
    ) -> Result<Self, DiagError> {
        println!("[INFO] Connecting to AMQ broker at {host}:{port}");

        let url = format!("ws://{host}:{port}");
        let (ws, _response) = connect_async(url.as_str()).await?;

        let mut session = Self { ws };
        session.send_frame(Frame::connect()).await?;
        session.await_connected(handshake_timeout).await?;

        println!("[INFO] Connected to AMQ broker");
        Ok(session)
    }

    async fn await_connected(&mut self, deadline: Duration) -> Result<(), DiagError> {
        let frame = timeout(deadline, self.next_frame())
            .await
            .map_err(|_| DiagError::Handshake("timed out waiting for CONNECTED".to_string()))??
            .ok_or(DiagError::ConnectionClosed)?;

        match frame.command {
            Command::Connected => Ok(()),
            Command::Error => Err(DiagError::Handshake(frame.body)),
            other => Err(DiagError::Handshake(format!(
                "unexpected {} frame during handshake",
                other.as_str()
            ))),
        }
    }

    /// Subscribes to the named topic with auto acknowledgement.
    pub async fn subscribe(&mut self, topic: &str) -> Result<(), DiagError> {
        self.send_frame(Frame::subscribe(topic)).await
    }

    /// Publishes a JSON body to the named topic.
    pub async fn send_json(&mut self, topic: &str, body: &str) -> Result<(), DiagError> {
        self.send_frame(Frame::send(topic, body)).await
    }

    async fn send_frame(&mut self, frame: Frame) -> Result<(), DiagError> {
        self.ws.send(WsMessage::text(frame.render())).await?;
        Ok(())
    }

    /// Reads the next STOMP frame off the socket.
    ///
    /// Returns `None` once the broker closes the connection. Heart-beat
    /// payloads (newline only) are skipped.
    async fn next_frame(&mut self) -> Result<Option<Frame>, DiagError> {
        while let Some(msg) = self.ws.next().await {
            let text = match msg? {
                WsMessage::Text(text) => text.to_string(),
                WsMessage::Binary(data) => String::from_utf8(data.to_vec())
                    .map_err(|_| DiagError::MalformedFrame("non-UTF-8 frame".to_string()))?,
                WsMessage::Close(_) => return Ok(None),
                _ => continue,
            };

            if text.trim_matches(|c| c == '\n' || c == '\r' || c == '\0').is_empty() {
                continue;
            }

            return Frame::parse(&text).map(Some);
        }
        Ok(None)
    }

    /// Waits for the next message or error frame from the broker.
    ///
    /// Other inbound frames (receipts, late CONNECTED duplicates) are
    /// silently consumed. Returns `None` once the connection is closed.
    pub async fn next_event(&mut self) -> Result<Option<SessionEvent>, DiagError> {
        loop {
            match self.next_frame().await? {
                Some(frame) => match frame.command {
                    Command::Message => return Ok(Some(SessionEvent::Message(frame))),
                    Command::Error => return Ok(Some(SessionEvent::Error(frame))),
                    _ => continue,
                },
                None => return Ok(None),
            }
        }
    }

    /// Best-effort DISCONNECT frame and WebSocket close.
    ///
    /// Errors are ignored; the session is unusable afterward either way.
    pub async fn disconnect(&mut self) {
        let _ = self.send_frame(Frame::disconnect()).await;
        let _ = self.ws.close(None).await;
        println!("[INFO] Disconnected from AMQ broker");
    }
}
