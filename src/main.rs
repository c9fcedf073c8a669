//! SMS relay service binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!                        │                 SMS RELAY                  │
//!                        │                                            │
//!   Front-end request    │  ┌────────┐   ┌──────────┐   ┌─────────┐  │
//!   ─────────────────────┼─▶│  http  │──▶│  roster  │   │ gateway │  │
//!                        │  │ server │   │normalizer│   │ client  │──┼──▶ SMS gateway
//!                        │  └────────┘   └──────────┘   └─────────┘  │    (or forward /
//!                        │       │                           ▲       │     mock echo)
//!                        │       └───────────────────────────┘       │
//!                        │                                            │
//!                        │  ┌──────────────────────────────────────┐ │
//!                        │  │        Cross-Cutting Concerns        │ │
//!                        │  │  config · bearer gate · tracing      │ │
//!                        │  └──────────────────────────────────────┘ │
//!                        └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use sms_relay::config::{config_from_env, load_config};
use sms_relay::observability::logging;
use sms_relay::HttpServer;

#[derive(Parser)]
#[command(name = "sms-relay")]
#[command(about = "SMS relay service with roster normalization", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Without it, defaults plus
    /// environment variables (PORT, SOLAPI_KEY, ...) apply.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => config_from_env()?,
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        auth_gate = config.auth.enabled(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
