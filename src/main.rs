// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use codequal_logo_relay::{api::start_server, cli::Cli, config::RelayConfig, version};
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    if !dotenv_loaded {
        warn!("No .env file found, using process environment");
    }

    let cli = Cli::parse();
    let config = cli.apply(RelayConfig::from_env());
    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {}", e))?;

    info!("{}", version::get_version_string());
    if config.has_api_key() {
        info!("FAL Key is configured");
    } else {
        warn!("FAL Key is NOT configured");
    }
    info!("Upstream endpoint: {}", config.upstream_url);

    start_server(config).await
}
