// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the logo relay process

use std::env;
use std::time::Duration;

/// Default FAL endpoint for Flux image generation
pub const DEFAULT_UPSTREAM_URL: &str = "https://fal.ai/api/fal/fast/flux1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7777;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Process-wide relay configuration, built once at startup
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// FAL API key (`FAL_KEY`); absence only fails individual requests
    pub api_key: Option<String>,
    /// Upstream image generation endpoint
    pub upstream_url: String,
    /// Bind address
    pub host: String,
    /// Listening port
    pub port: u16,
    /// Timeout applied to each upstream call
    pub upstream_timeout: Duration,
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_key: lookup("FAL_KEY").filter(|key| !key.trim().is_empty()),
            upstream_url: lookup("FAL_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.upstream_url),
            host: lookup("LOGO_RELAY_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("LOGO_RELAY_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            upstream_timeout: lookup("FAL_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
        }
    }

    /// Validate the configuration
    ///
    /// A missing API key is not an error here: the server still starts and
    /// reports the problem on each generation request.
    pub fn validate(&self) -> Result<(), String> {
        let parsed = url::Url::parse(&self.upstream_url)
            .map_err(|e| format!("invalid upstream url '{}': {}", self.upstream_url, e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(format!(
                "upstream url must use http or https, got '{}'",
                parsed.scheme()
            ));
        }
        if self.upstream_timeout.is_zero() {
            return Err("upstream timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Socket address string the server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}
