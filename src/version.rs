// Version information for the CodeQual logo relay

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Upstream model the relay targets
pub const UPSTREAM_MODEL: &str = "fal-ai/flux (fast)";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("CodeQual logo relay {} ({})", VERSION_NUMBER, UPSTREAM_MODEL)
}
