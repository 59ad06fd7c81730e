// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_MESSAGE: &str = "Logo Generation Server for CodeQual.dev";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoResponse {
    pub message: String,
}

/// GET / - fixed service banner, independent of configuration
pub async fn root_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: SERVICE_MESSAGE.to_string(),
    })
}
