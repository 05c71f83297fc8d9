mod settings;

use config::{Config, ConfigError, File, FileFormat};

pub use settings::{
    DEFAULT_SEND_INTERVAL_SECS, ListenerSettings, PublisherSettings, default_topics,
};
use settings::{PartialListenerSettings, PartialPublisherSettings};

/// Loads the publisher configuration from the given YAML file.
/// Merges the loaded values with defaults for the optional fields.
/// Returns a `PublisherSettings` struct; missing required keys are an error.
pub fn load_publisher_config(path: &str) -> Result<PublisherSettings, ConfigError> {
    let config = Config::builder()
        .add_source(File::new(path, FileFormat::Yaml))
        .build()?;

    // Try to deserialize what is available
    let partial: PartialPublisherSettings = config.try_deserialize()?;

    // Merge with defaults
    Ok(PublisherSettings {
        broker_host: partial.broker_host,
        broker_port: partial.broker_port,
        nitf_directory: partial.nitf_directory.unwrap_or_default(),
        send_interval: partial
            .send_interval
            .unwrap_or(DEFAULT_SEND_INTERVAL_SECS),
    })
}

/// Loads the listener configuration from the given YAML file.
/// Merges the loaded values with defaults for the optional fields.
/// Returns a `ListenerSettings` struct; missing required keys are an error.
pub fn load_listener_config(path: &str) -> Result<ListenerSettings, ConfigError> {
    let config = Config::builder()
        .add_source(File::new(path, FileFormat::Yaml))
        .build()?;

    let partial: PartialListenerSettings = config.try_deserialize()?;

    Ok(ListenerSettings {
        broker_host: partial.broker_host,
        broker_port: partial.broker_port,
        topics: partial.topics.unwrap_or_else(default_topics),
    })
}

#[cfg(test)]
mod tests;
