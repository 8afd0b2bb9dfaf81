//! GitHub API reverse proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ axum router ──▶ proxy::translate ──▶ UpstreamClient ──▶ api.github.com
//!                   │                                (basic auth, 30s)        │
//!     Client ◀──────┴────────── proxy::relay ◀────────────────────────────────┘
//!
//!     GET /  ──▶ {"message":"pong"}
//! ```
//!
//! Configuration comes from `PORT`, `GH_USERNAME`, `GH_TOKEN` and an
//! optional TOML file. Missing credentials stop the process before any
//! port is bound.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use github_proxy::config::load_config;
use github_proxy::lifecycle::{wait_for_signal, Shutdown};
use github_proxy::observability::{init_logging, LogFormat};
use github_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "github-proxy", version)]
#[command(about = "Transparent reverse proxy for the GitHub REST API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    tracing::info!("github-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    let bind_address = config.listener.bind_address();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
