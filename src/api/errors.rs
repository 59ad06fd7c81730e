// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logo::LogoError;

/// Error body returned by every failing endpoint: `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Body could not be parsed into the request model
    InvalidRequest(String),
    /// Failure from the generation pipeline
    Logo(LogoError),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Logo(e) => e.to_string(),
        };

        ErrorResponse { detail }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 422,
            ApiError::Logo(LogoError::Upstream { status, .. }) => *status,
            ApiError::Logo(LogoError::MissingApiKey)
            | ApiError::Logo(LogoError::NoImageGenerated)
            | ApiError::Logo(LogoError::Timeout { .. })
            | ApiError::Logo(LogoError::Unexpected(_)) => 500,
        }
    }
}

impl From<LogoError> for ApiError {
    fn from(e: LogoError) -> Self {
        ApiError::Logo(e)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::Logo(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_response())).into_response()
    }
}
