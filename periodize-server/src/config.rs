use anyhow::{anyhow, Result};
use chrono::Duration;
use periodize::auth::TokenSettings;
use periodize::database::get_database_url;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 168;
/// Ten years
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

/// Everything the HTTP server needs to start
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub token: TokenSettings,
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    /// Assemble a config from raw command line / environment values.
    ///
    /// The signing secret is mandatory; a missing or blank secret fails here,
    /// before any connection is opened.
    pub fn from_parts(
        port: u16,
        database: Option<&str>,
        app_secret: Option<String>,
        token_ttl_hours: i64,
        cors_origin: Option<String>,
    ) -> Result<Self> {
        let secret = app_secret
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| anyhow!("APP_SECRET must be set to sign session tokens"))?;

        let ttl = Some(token_ttl_hours)
            .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                anyhow!(
                    "Token lifetime must be between 1 and {} hours, got {}",
                    MAX_TOKEN_TTL_HOURS,
                    token_ttl_hours
                )
            })?;

        Ok(Self {
            port,
            database_url: get_database_url(database),
            token: TokenSettings::new(secret, ttl),
            cors_origin,
        })
    }
}
