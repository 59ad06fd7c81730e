// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate_logo;
pub mod handlers;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use generate_logo::{generate_logo_handler, LogoRequest, LogoResponse};
pub use handlers::{root_handler, InfoResponse, SERVICE_MESSAGE};
pub use http_server::{create_app, start_server, AppState};
