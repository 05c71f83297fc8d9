//! Mock publisher for the SAR ATR pipeline.
//!
//! Sends `FileLocation_uci` messages to the AMQ broker, either with real
//! NITF file paths from a configured directory or with mock paths for
//! communication testing.

use clap::Parser;
use uci_diag::config::load_publisher_config;
use uci_diag::publisher::{MockPublisher, RunMode};

#[derive(Debug, Parser)]
#[command(name = "mock-publisher", about = "Publishes FileLocation_uci test messages")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(default_value = "publisher_config.yaml")]
    config: String,

    /// Send a single message and exit instead of looping.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() {
    std::process::exit(run(Cli::parse()).await);
}

async fn run(cli: Cli) -> i32 {
    let settings = match load_publisher_config(&cli.config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("[ERROR] Failed to load configuration from {}: {err}", cli.config);
            return 1;
        }
    };

    let mut publisher = match MockPublisher::connect(settings).await {
        Ok(publisher) => publisher,
        Err(err) => {
            eprintln!("[ERROR] Failed to connect: {err}");
            return 1;
        }
    };

    let mode = if cli.once {
        RunMode::Single
    } else {
        RunMode::Continuous
    };

    tokio::select! {
        _ = publisher.run(mode) => {}
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("[INFO] Stopping continuous mode");
        }
    }

    // Disconnect runs on both the normal and the interrupt path
    publisher.disconnect().await;
    0
}
