// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::generate_logo::generate_logo_handler;
use super::handlers::root_handler;
use crate::config::RelayConfig;
use crate::logo::{FalClient, ImageProvider};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub image_provider: Arc<dyn ImageProvider>,
}

impl AppState {
    pub fn new(config: RelayConfig, image_provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            config: Arc::new(config),
            image_provider,
        }
    }

    /// State backed by the real FAL client
    pub fn from_config(config: RelayConfig) -> Result<Self> {
        let client = FalClient::from_config(&config)?;
        info!("Image provider: {}", client.name());
        Ok(Self::new(config, Arc::new(client)))
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/generate-logo", post(generate_logo_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: RelayConfig) -> Result<()> {
    let addr = config.listen_addr();
    let state = AppState::from_config(config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!("Logo relay listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Logo relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
