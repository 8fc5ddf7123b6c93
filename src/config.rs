//! Configuration
//!
//! Connection parameters for the realtime order store, read from the
//! environment (with `.env` support) and CLI arguments.

use clap::{Args, Parser};

use crate::orders::store::RtdbConfig;

/// Realtime order store settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Realtime database base URL
    #[arg(long, env = "RTDB_URL")]
    pub rtdb_url: String,

    /// Database secret or ID token; anonymous access when omitted
    #[arg(long, env = "RTDB_AUTH_TOKEN")]
    pub rtdb_auth_token: Option<String>,
}

impl From<StoreConfig> for RtdbConfig {
    fn from(config: StoreConfig) -> Self {
        Self {
            base_url: config.rtdb_url,
            auth_token: config.rtdb_auth_token,
        }
    }
}

/// Dhaba configuration
#[derive(Debug, Parser)]
#[command(name = "dhaba", about = "Dhaba online ordering", long_about = None)]
pub struct AppConfig {
    /// Realtime order store settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
