use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Management CLI for the SMS relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token, when the relay's auth gate is enabled.
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay health and active provider
    Health,
    /// Show the sending configuration the front-end sees
    Config,
    /// Send a single message
    Send {
        #[arg(long)]
        to: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        from: Option<String>,
        /// Echo locally instead of calling the gateway
        #[arg(long)]
        dry: bool,
    },
    /// Normalize a roster JSON file and print the result
    Roster {
        /// File holding {"headers": [...], "rows": [[...]]} or a
        /// teacher→students object
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(token) = &cli.token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))?,
        );
    }

    match cli.command {
        Commands::Health => {
            let res = client
                .get(format!("{}/", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Config => {
            let res = client
                .get(format!("{}/api/sms/config", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Send { to, text, from, dry } => {
            let mut body = json!({ "to": to, "text": text, "dry": dry });
            if let Some(from) = from {
                body["from"] = Value::String(from);
            }
            let res = client
                .post(format!("{}/api/sms", cli.url))
                .headers(headers)
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Roster { file } => {
            let payload: Value = serde_json::from_str(&std::fs::read_to_string(file)?)?;
            let res = client
                .post(format!("{}/api/roster", cli.url))
                .headers(headers)
                .json(&payload)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
