//! Environment-backed server configuration.

use anyhow::{Context, Result};

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on. `PORT`, default 5000.
    pub port: u16,
}

impl Config {
    /// Load configuration, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid PORT value: {value}"))?,
            Err(_) => 5000,
        };

        Ok(Self { port })
    }
}
