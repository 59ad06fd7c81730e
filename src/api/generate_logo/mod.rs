// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation API endpoint module
//!
//! Provides POST /generate-logo.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_logo_handler;
pub use request::LogoRequest;
pub use response::LogoResponse;
