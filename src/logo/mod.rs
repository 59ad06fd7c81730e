// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation via the FAL hosted Flux model

pub mod client;
pub mod prompt;
pub mod provider;
pub mod types;

pub use client::FalClient;
pub use prompt::{FalImageRequest, LOGO_PROMPT, NEGATIVE_PROMPT};
pub use provider::ImageProvider;
pub use types::{FalImage, LogoError, UpstreamResult};
