// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! FAL image generation client
//!
//! Posts the fixed logo request to the Flux endpoint and unwraps the JSON
//! response. A single attempt is made per call.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::prompt::FalImageRequest;
use super::provider::ImageProvider;
use super::types::{LogoError, UpstreamResult};
use crate::config::RelayConfig;

/// Client for the FAL hosted Flux endpoint
pub struct FalClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl FalClient {
    /// Create a new FalClient
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "FAL client configured: endpoint={}, timeout={}s",
            endpoint,
            timeout.as_secs()
        );

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            timeout,
        })
    }

    /// Create a client from the relay configuration
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Self::new(&config.upstream_url, config.upstream_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_transport_error(&self, e: reqwest::Error) -> LogoError {
        if e.is_timeout() {
            LogoError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            LogoError::Unexpected(e.to_string())
        }
    }
}

#[async_trait]
impl ImageProvider for FalClient {
    async fn generate(
        &self,
        api_key: &str,
        request: &FalImageRequest,
    ) -> Result<UpstreamResult, LogoError> {
        debug!("FAL generate POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, format!("Key {}", api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("FAL returned {}: {}", status, body);
            return Err(LogoError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        serde_json::from_str::<UpstreamResult>(&body)
            .map_err(|e| LogoError::Unexpected(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "fal"
    }
}
