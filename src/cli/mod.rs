use clap::Parser;

use crate::config::RelayConfig;

/// CodeQual.dev logo generation relay
#[derive(Parser, Debug, Default)]
#[command(name = "codequal-logo-relay")]
#[command(version)]
#[command(about = "HTTP relay that asks FAL for the CodeQual.dev logo", long_about = None)]
pub struct Cli {
    /// Bind address (overrides LOGO_RELAY_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Listening port (overrides LOGO_RELAY_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Upstream request timeout in seconds (overrides FAL_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub upstream_timeout_secs: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of the environment-derived config
    pub fn apply(&self, mut config: RelayConfig) -> RelayConfig {
        if let Some(ref host) = self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(secs) = self.upstream_timeout_secs {
            config.upstream_timeout = std::time::Duration::from_secs(secs);
        }
        config
    }
}
