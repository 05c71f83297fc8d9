use super::{load_listener_config, load_publisher_config};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
fn test_publisher_config_full() {
    let file = write_config(
        "broker_host: broker.local\n\
         broker_port: 61614\n\
         nitf_directory: /data/nitf\n\
         send_interval: 2\n",
    );
    let settings = load_publisher_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(settings.broker_host, "broker.local");
    assert_eq!(settings.broker_port, 61614);
    assert_eq!(settings.nitf_directory, "/data/nitf");
    assert_eq!(settings.send_interval, 2);
}

#[test]
fn test_publisher_config_defaults() {
    let file = write_config("broker_host: localhost\nbroker_port: 61614\n");
    let settings = load_publisher_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(settings.nitf_directory, "");
    assert_eq!(settings.send_interval, 5);
}

#[test]
fn test_publisher_config_missing_required_key() {
    let file = write_config("broker_host: localhost\n");
    assert!(load_publisher_config(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_listener_config_full() {
    let file = write_config(
        "broker_host: localhost\n\
         broker_port: 61614\n\
         topics:\n\
           - FileLocation_uci\n",
    );
    let settings = load_listener_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(settings.topics, vec!["FileLocation_uci".to_string()]);
}

#[test]
fn test_listener_config_default_topics() {
    let file = write_config("broker_host: localhost\nbroker_port: 61614\n");
    let settings = load_listener_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(
        settings.topics,
        vec![
            "Entity_uci".to_string(),
            "AtrProcessingResult_uci".to_string()
        ]
    );
}

#[test]
fn test_missing_config_file() {
    assert!(load_listener_config("/no/such/config.yaml").is_err());
}
