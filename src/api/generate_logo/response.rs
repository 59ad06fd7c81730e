// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation response type

use serde::{Deserialize, Serialize};

/// Response from logo generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoResponse {
    /// URL of the generated image, as returned by the provider
    pub logo: String,
}
