//! The `publisher` module implements the mock publisher tool.
//!
//! It scans a configured directory for NITF imagery, wraps a chosen (or
//! synthesized) file path in a `FileLocation` envelope, and publishes it
//! to the `FileLocation_uci` topic once or on an interval.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use tokio::time;

use crate::client::BrokerSession;
use crate::config::PublisherSettings;
use crate::utils::error::DiagError;

/// Destination topic for file-location notifications.
pub const FILE_LOCATION_TOPIC: &str = "FileLocation_uci";

/// Whether the publisher sends one message or loops on an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Continuous,
}

/// Enumerates NITF files (`.ntf` / `.nitf`, case-insensitive) under `dir`,
/// recursively.
///
/// An empty or non-existing `dir` yields no candidates; distinguishing the
/// two is the scanner's job.
pub fn discover_candidates(dir: &str) -> Vec<PathBuf> {
    let root = Path::new(dir);
    if dir.is_empty() || !root.is_dir() {
        return Vec::new();
    }

    let mut found = Vec::new();
    collect_nitf_files(root, &mut found);
    found
}

/// Re-scans the configured directory on every send.
///
/// A non-empty directory that does not exist is a misconfiguration and is
/// called out with a warning before falling back to mock paths, but only
/// once per process rather than on every interval.
pub struct CandidateScanner {
    dir: String,
    warned_missing: bool,
}

impl CandidateScanner {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            warned_missing: false,
        }
    }

    pub fn scan(&mut self) -> Vec<PathBuf> {
        if !self.dir.is_empty() && !Path::new(&self.dir).is_dir() {
            if self.note_missing_directory() {
                println!(
                    "[WARNING] Configured NITF directory does not exist: {}",
                    self.dir
                );
            }
            return Vec::new();
        }
        discover_candidates(&self.dir)
    }

    /// Returns true only for the first missing-directory observation.
    fn note_missing_directory(&mut self) -> bool {
        if self.warned_missing {
            return false;
        }
        self.warned_missing = true;
        true
    }
}

fn collect_nitf_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_nitf_files(&path, out);
        } else if has_nitf_extension(&path) {
            out.push(path);
        }
    }
}

fn has_nitf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "ntf" || ext == "nitf"
        })
        .unwrap_or(false)
}

/// Builds the `FileLocation` envelope for a file path.
pub fn build_message(file_path: &str) -> Value {
    json!({
        "FileLocation": {
            "MessageData": {
                "LocationAndStatus": {
                    "Location": {
                        "Network": {
                            "Address": file_path
                        }
                    }
                }
            }
        }
    })
}

/// Synthesizes a mock NITF path for communication testing.
pub fn mock_image_path() -> String {
    let number = rand::thread_rng().gen_range(1000..=9999);
    format!("/mock/data/test_image_{number}.nitf")
}

/// The mock publisher: one broker session plus its immutable settings.
pub struct MockPublisher {
    settings: PublisherSettings,
    scanner: CandidateScanner,
    session: BrokerSession,
}

impl MockPublisher {
    /// Connects to the configured broker. Connection failure is fatal to
    /// the tool; the binary maps it to exit code 1.
    pub async fn connect(settings: PublisherSettings) -> Result<Self, DiagError> {
        let session = BrokerSession::connect(&settings.broker_host, settings.broker_port).await?;
        let scanner = CandidateScanner::new(settings.nitf_directory.clone());
        Ok(Self {
            settings,
            scanner,
            session,
        })
    }

    /// Selects a file path and publishes one `FileLocation_uci` message.
    ///
    /// Candidates are re-discovered on every send so files dropped into the
    /// directory while the tool is running are picked up.
    pub async fn send_once(&mut self) -> Result<(), DiagError> {
        let candidates = self.scanner.scan();

        let file_path = match candidates.choose(&mut rand::thread_rng()) {
            Some(path) => {
                let path = path.display().to_string();
                println!("[INFO] Selected NITF file: {path}");
                path
            }
            None => {
                let path = mock_image_path();
                println!("[INFO] No NITF files found, using mock path: {path}");
                path
            }
        };

        let body = serde_json::to_string(&build_message(&file_path))?;
        self.session.send_json(FILE_LOCATION_TOPIC, &body).await?;

        println!("[INFO] Sent FileLocation_uci message for: {file_path}");
        Ok(())
    }

    /// Runs the tool in the given mode.
    ///
    /// Continuous mode loops until the owning binary's interrupt handling
    /// cancels it; a failed send is logged and never retried.
    pub async fn run(&mut self, mode: RunMode) {
        match mode {
            RunMode::Single => {
                println!("[INFO] Sending single message");
                if let Err(err) = self.send_once().await {
                    eprintln!("[ERROR] Failed to send message: {err}");
                }
            }
            RunMode::Continuous => {
                println!(
                    "[INFO] Starting continuous mode, sending every {} seconds",
                    self.settings.send_interval
                );
                println!("[INFO] Press Ctrl+C to stop");
                loop {
                    if let Err(err) = self.send_once().await {
                        eprintln!("[ERROR] Failed to send message: {err}");
                    }
                    time::sleep(Duration::from_secs(self.settings.send_interval)).await;
                }
            }
        }
    }

    /// Releases the broker session.
    pub async fn disconnect(&mut self) {
        self.session.disconnect().await;
    }
}

#[cfg(test)]
mod tests;
