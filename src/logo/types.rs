// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream response model and the relay's error taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response body returned by the FAL image endpoint
///
/// Only `images[0].url` is of interest; everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamResult {
    #[serde(default)]
    pub images: Vec<FalImage>,
}

/// A single generated image entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FalImage {
    #[serde(default)]
    pub url: Option<String>,
}

impl UpstreamResult {
    /// URL of the first generated image, if the provider returned one
    pub fn first_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .and_then(|image| image.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Errors that can occur while generating a logo
#[derive(Debug, Error)]
pub enum LogoError {
    /// No FAL credential in the process configuration
    #[error("FAL API key not configured")]
    MissingApiKey,

    /// Upstream answered with a non-200 status; body is passed through verbatim
    #[error("{body}")]
    Upstream {
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Upstream succeeded but returned no image URL
    #[error("No image generated")]
    NoImageGenerated,

    /// Upstream call exceeded the configured timeout
    #[error("Upstream request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },

    /// Anything else: transport failure, malformed JSON, ...
    #[error("{0}")]
    Unexpected(String),
}
