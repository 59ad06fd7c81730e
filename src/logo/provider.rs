// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image provider trait definition

use async_trait::async_trait;

use super::prompt::FalImageRequest;
use super::types::{LogoError, UpstreamResult};

/// Upstream image generation backend
///
/// One call per incoming request, no retries. Implementations map a non-200
/// status to [`LogoError::Upstream`] with the raw body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Submit one generation request authenticated with `api_key`
    async fn generate(
        &self,
        api_key: &str,
        request: &FalImageRequest,
    ) -> Result<UpstreamResult, LogoError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
