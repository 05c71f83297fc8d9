use crate::utils::error::DiagError;

/// Topics live under the `/topic/` namespace on the broker.
const TOPIC_PREFIX: &str = "/topic/";

/// The subset of STOMP 1.2 commands the diagnostic tools exchange with the
/// broker.
///
/// `Connect`, `Subscribe`, `Send` and `Disconnect` are client-to-broker;
/// `Connected`, `Message`, `Error` and `Receipt` come back from the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Connect,
    Connected,
    Subscribe,
    Send,
    Message,
    Error,
    Receipt,
    Disconnect,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Connect => "CONNECT",
            Command::Connected => "CONNECTED",
            Command::Subscribe => "SUBSCRIBE",
            Command::Send => "SEND",
            Command::Message => "MESSAGE",
            Command::Error => "ERROR",
            Command::Receipt => "RECEIPT",
            Command::Disconnect => "DISCONNECT",
        }
    }

    pub fn parse(line: &str) -> Result<Self, DiagError> {
        match line {
            "CONNECT" => Ok(Command::Connect),
            "CONNECTED" => Ok(Command::Connected),
            "SUBSCRIBE" => Ok(Command::Subscribe),
            "SEND" => Ok(Command::Send),
            "MESSAGE" => Ok(Command::Message),
            "ERROR" => Ok(Command::Error),
            "RECEIPT" => Ok(Command::Receipt),
            "DISCONNECT" => Ok(Command::Disconnect),
            other => Err(DiagError::MalformedFrame(format!(
                "unknown command: {other}"
            ))),
        }
    }
}

/// A single STOMP frame: command, headers in wire order, and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: Command,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Frame {
    pub fn new(command: Command, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        Self {
            command,
            headers,
            body: body.into(),
        }
    }

    /// The `CONNECT` frame opening the STOMP session.
    pub fn connect() -> Self {
        Self::new(
            Command::Connect,
            vec![
                ("accept-version".to_string(), "1.2".to_string()),
                ("host".to_string(), "/".to_string()),
            ],
            "",
        )
    }

    /// The broker's `CONNECTED` acknowledgement.
    pub fn connected() -> Self {
        Self::new(
            Command::Connected,
            vec![("version".to_string(), "1.2".to_string())],
            "",
        )
    }

    /// A `SUBSCRIBE` frame for the named topic, auto-ack, with a
    /// per-topic subscription id.
    pub fn subscribe(topic: &str) -> Self {
        Self::new(
            Command::Subscribe,
            vec![
                ("destination".to_string(), format!("{TOPIC_PREFIX}{topic}")),
                ("id".to_string(), format!("sub-{topic}")),
                ("ack".to_string(), "auto".to_string()),
            ],
            "",
        )
    }

    /// A `SEND` frame publishing a JSON body to the named topic.
    pub fn send(topic: &str, body: &str) -> Self {
        Self::new(
            Command::Send,
            vec![
                ("destination".to_string(), format!("{TOPIC_PREFIX}{topic}")),
                ("content-type".to_string(), "application/json".to_string()),
                ("content-length".to_string(), body.len().to_string()),
            ],
            body,
        )
    }

    /// A broker-side `MESSAGE` frame delivering a body to a destination.
    pub fn message(destination: &str, body: &str) -> Self {
        Self::new(
            Command::Message,
            vec![
                ("destination".to_string(), destination.to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body,
        )
    }

    pub fn disconnect() -> Self {
        Self::new(Command::Disconnect, Vec::new(), "")
    }

    /// Returns the value of the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Serializes the frame to its wire form, including the NUL terminator.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(self.command.as_str());
        out.push('\n');
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push(':');
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.body);
        out.push('\0');
        out
    }

    /// Parses a frame from its wire form.
    ///
    /// A missing NUL terminator is tolerated; a missing blank line between
    /// headers and body is not.
    pub fn parse(raw: &str) -> Result<Self, DiagError> {
        let raw = raw.strip_suffix('\0').unwrap_or(raw);

        let (head, body) = raw
            .split_once("\n\n")
            .ok_or_else(|| DiagError::MalformedFrame("missing header/body separator".to_string()))?;

        let mut lines = head.lines();
        let command_line = lines
            .next()
            .ok_or_else(|| DiagError::MalformedFrame("empty frame".to_string()))?;
        let command = Command::parse(command_line)?;

        let mut headers = Vec::new();
        for line in lines {
            let (name, value) = line.split_once(':').ok_or_else(|| {
                DiagError::MalformedFrame(format!("invalid header line: {line}"))
            })?;
            headers.push((name.to_string(), value.to_string()));
        }

        Ok(Self::new(command, headers, body))
    }
}
