//! `octavia` — serves the ring-numeral HTTP API.

use anyhow::Result;
use clap::Parser;
use oct_core::OctaviaConfig;
use oct_server::{app_with_state, state::AppState};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "octavia", version, about = "Octavia ring numerals (base 8) HTTP API")]
struct Cli {
    /// JSON config file; defaults are used for anything it omits.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => OctaviaConfig::load(path)?,
        None => OctaviaConfig::default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::from_config(config)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, policy = ?state.default_selection, "octavia listening");

    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}
