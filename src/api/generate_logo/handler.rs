// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info, warn};

use super::request::LogoRequest;
use super::response::LogoResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::logo::{FalImageRequest, LogoError};

/// POST /generate-logo - Generate the CodeQual.dev logo
///
/// Pipeline:
/// 1. Parse request body (422 on failure)
/// 2. Require a configured FAL key (500, no upstream call if absent)
/// 3. Build the fixed upstream request
/// 4. Call the image provider once
/// 5. Extract `images[0].url` (500 "No image generated" if absent)
/// 6. Return `{"logo": url}`
pub async fn generate_logo_handler(
    State(state): State<AppState>,
    payload: Result<Json<LogoRequest>, JsonRejection>,
) -> Result<Json<LogoResponse>, ApiError> {
    // 1. Parse request
    let Json(request) = payload.map_err(|rejection| {
        warn!("Logo request rejected: {}", rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    })?;

    debug!(
        "Logo generation request received: prompt_len={}, style={}, background={}",
        request.prompt.len(),
        request.style,
        request.background
    );

    // 2. Credential check
    let api_key = state.config.api_key.as_deref().ok_or_else(|| {
        warn!("Logo generation refused: FAL key is not configured");
        LogoError::MissingApiKey
    })?;

    // 3. Fixed request; the caller's prompt is not interpolated
    let upstream_request = FalImageRequest::logo();

    // 4. Generate
    let result = state
        .image_provider
        .generate(api_key, &upstream_request)
        .await
        .map_err(|e| {
            warn!("Logo generation failed: {}", e);
            e
        })?;

    // 5. Unwrap the image URL
    let url = result.first_image_url().ok_or_else(|| {
        warn!("Upstream returned no image URL");
        LogoError::NoImageGenerated
    })?;

    info!("Logo generated: {}", url);

    // 6. Build response
    Ok(Json(LogoResponse {
        logo: url.to_string(),
    }))
}
