//! UCI message listener.
//!
//! Subscribes to `Entity_uci` and `AtrProcessingResult_uci` messages (or a
//! configured topic list) on the AMQ broker and pretty-prints them for
//! monitoring and debugging.

use clap::Parser;
use uci_diag::config::load_listener_config;
use uci_diag::listener::{REPORT_RULE, UciListener};

#[derive(Debug, Parser)]
#[command(name = "uci-listener", about = "Pretty-prints UCI messages from the broker")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(default_value = "listener_config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() {
    std::process::exit(run(Cli::parse()).await);
}

async fn run(cli: Cli) -> i32 {
    let settings = match load_listener_config(&cli.config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("[ERROR] Failed to load configuration from {}: {err}", cli.config);
            return 1;
        }
    };

    println!("{REPORT_RULE}");
    println!("UCI Message Listener");
    println!("{REPORT_RULE}");
    println!("Listening to topics: {}", settings.topics.join(", "));
    println!("Press Ctrl+C to stop");
    println!("{REPORT_RULE}");
    println!();

    let mut listener = match UciListener::connect_and_subscribe(settings).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("[ERROR] Failed to connect: {err}");
            return 1;
        }
    };

    tokio::select! {
        _ = listener.run() => {}
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("[INFO] Stopping listener...");
        }
    }

    // Disconnect runs on both the normal and the interrupt path
    listener.disconnect().await;

    println!();
    println!("[INFO] Total messages received: {}", listener.message_count());
    0
}
