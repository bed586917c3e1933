//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use coursehub_client::config::ClientConfig;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Public values embedded into every rendered page.
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COURSEHUB_API_URL`: course API base URL
    /// - `COURSEHUB_API_TOKEN`: static bearer token for the course API
    /// - `COURSEHUB_IDENTITY_URL`: identity provider frontend API URL
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(env_value)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let client = ClientConfig::from_values(
            lookup("COURSEHUB_API_URL").as_deref(),
            lookup("COURSEHUB_API_TOKEN").as_deref(),
            lookup("COURSEHUB_IDENTITY_URL").as_deref(),
        );
        Ok(Self { port, client })
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ServerError::InvalidPort(value.to_owned())),
    }
}
