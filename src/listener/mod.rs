//! The `listener` module implements the UCI message listener tool.
//!
//! It subscribes to the configured result topics and hands every inbound
//! frame to a `MessageReporter`, which prints a boxed, timestamped report
//! per message.

mod report;

pub use report::{MessageReporter, REPORT_RULE, render_body, topic_label};

use crate::client::{BrokerSession, SessionEvent};
use crate::config::ListenerSettings;
use crate::utils::error::DiagError;

/// The UCI listener: one broker session, its immutable settings, and the
/// handler invoked synchronously per received frame.
pub struct UciListener {
    settings: ListenerSettings,
    session: BrokerSession,
    reporter: MessageReporter,
}

impl UciListener {
    /// Connects to the configured broker and subscribes to every topic.
    ///
    /// A subscribe failure for one topic is logged and does not prevent
    /// subscribing to the others; only the initial connection is fatal.
    pub async fn connect_and_subscribe(settings: ListenerSettings) -> Result<Self, DiagError> {
        let session = BrokerSession::connect(&settings.broker_host, settings.broker_port).await?;
        let mut listener = Self {
            session,
            reporter: MessageReporter::new(),
            settings,
        };

        for topic in listener.settings.topics.clone() {
            match listener.session.subscribe(&topic).await {
                Ok(()) => println!("[INFO] Subscribed to topic: {topic}"),
                Err(err) => eprintln!("[ERROR] Failed to subscribe to {topic}: {err}"),
            }
        }

        Ok(listener)
    }

    /// Drains broker events until the connection closes or an unrecoverable
    /// receive error occurs. Cancellation comes from the owning binary's
    /// interrupt handling.
    pub async fn run(&mut self) {
        loop {
            match self.session.next_event().await {
                Ok(Some(SessionEvent::Message(frame))) => self.reporter.on_message(&frame),
                Ok(Some(SessionEvent::Error(frame))) => self.reporter.on_error(&frame),
                Ok(None) => {
                    println!("[INFO] Broker closed the connection");
                    return;
                }
                // A garbage frame is dropped; only connection-level
                // failures stop the loop
                Err(DiagError::MalformedFrame(reason)) => {
                    eprintln!("[ERROR] Discarding malformed frame: {reason}");
                }
                Err(err) => {
                    eprintln!("[ERROR] Receive failed: {err}");
                    return;
                }
            }
        }
    }

    /// Number of messages received so far.
    pub fn message_count(&self) -> usize {
        self.reporter.message_count()
    }

    /// Releases the broker session.
    pub async fn disconnect(&mut self) {
        self.session.disconnect().await;
    }
}
