use serde::Deserialize;

/// Seconds between sends when `send_interval` is not configured.
pub const DEFAULT_SEND_INTERVAL_SECS: u64 = 5;

/// Topics the listener watches when `topics` is not configured.
pub fn default_topics() -> Vec<String> {
    vec!["Entity_uci".to_string(), "AtrProcessingResult_uci".to_string()]
}

/// Configuration for the mock publisher.
///
/// `broker_host` and `broker_port` are required; the NITF source directory
/// and send interval fall back to defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct PublisherSettings {
    pub broker_host: String,
    pub broker_port: u16,
    pub nitf_directory: String,
    pub send_interval: u64,
}

/// Configuration for the UCI listener.
///
/// `broker_host` and `broker_port` are required; the topic list falls back
/// to the two standard result topics.
#[derive(Debug, Deserialize, Clone)]
pub struct ListenerSettings {
    pub broker_host: String,
    pub broker_port: u16,
    pub topics: Vec<String>,
}

/// Publisher settings as loaded from the YAML file, before defaults are
/// applied. Missing required fields fail deserialization.
#[derive(Debug, Deserialize)]
pub struct PartialPublisherSettings {
    pub broker_host: String,
    pub broker_port: u16,
    pub nitf_directory: Option<String>,
    pub send_interval: Option<u64>,
}

/// Listener settings as loaded from the YAML file, before defaults are
/// applied.
#[derive(Debug, Deserialize)]
pub struct PartialListenerSettings {
    pub broker_host: String,
    pub broker_port: u16,
    pub topics: Option<Vec<String>>,
}
