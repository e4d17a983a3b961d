//! Joule - Household energy usage tracker
//!
//! Usage:
//!   joule                              Serve the API on 127.0.0.1:3000
//!   joule --port 8080 --static-dir web Serve the API and the web frontend

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use joule_server::{serve, ServerConfig};

#[derive(Parser)]
#[command(name = "joule")]
#[command(about = "Household energy usage tracker", long_about = None)]
struct Cli {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory with the web frontend to serve alongside the API
    #[arg(long)]
    static_dir: Option<String>,

    /// Allow cross-origin requests from this origin (repeatable)
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = ServerConfig {
        allowed_origins: cli.allow_origins,
    };

    serve(&cli.host, cli.port, cli.static_dir.as_deref(), config).await
}
