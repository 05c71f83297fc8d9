use chrono::Local;

use crate::stomp::Frame;

/// Separator rule for per-message report blocks.
pub const REPORT_RULE: &str =
    "================================================================================";

/// Extracts the topic label from a destination header value.
///
/// The label is the last path segment, so `/topic/Entity_uci` becomes
/// `Entity_uci`. A destination without slashes is returned as-is.
pub fn topic_label(destination: &str) -> &str {
    destination.rsplit('/').next().unwrap_or(destination)
}

/// Renders a message body for display.
///
/// JSON bodies are pretty-printed with key order preserved as received;
/// anything else is returned verbatim.
pub fn render_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

/// Handler invoked synchronously for every frame the session delivers.
///
/// Keeps the running message count used for the final summary.
#[derive(Debug, Default)]
pub struct MessageReporter {
    message_count: usize,
}

impl MessageReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the boxed report block for one received message.
    pub fn on_message(&mut self, frame: &Frame) {
        self.message_count += 1;

        let topic = topic_label(frame.header("destination").unwrap_or("Unknown"));
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        println!();
        println!("{REPORT_RULE}");
        println!(
            "[{timestamp}] Message #{} on topic: {topic}",
            self.message_count
        );
        println!("{REPORT_RULE}");
        println!("{}", render_body(&frame.body));
        println!("{REPORT_RULE}");
        println!();
    }

    /// Prints an error frame's body; the listener keeps running.
    pub fn on_error(&mut self, frame: &Frame) {
        println!();
        println!("[ERROR] Received an error: {}", frame.body);
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }
}
