// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation request type

use serde::{Deserialize, Serialize};

fn default_style() -> String {
    "modern".to_string()
}

fn default_background() -> String {
    "transparent".to_string()
}

/// Request for logo generation via POST /generate-logo
///
/// All three fields are accepted but none of them reach the upstream call;
/// the prompt sent to the provider is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoRequest {
    /// Free-text description of the logo
    pub prompt: String,

    /// Visual style hint
    #[serde(default = "default_style")]
    pub style: String,

    /// Background hint
    #[serde(default = "default_background")]
    pub background: String,
}
