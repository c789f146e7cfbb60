//! Environment-driven server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host carries no domain configuration of its own: it needs a listen
//! port and the base URL of the external recipe API that `/api` requests
//! are forwarded to.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("API_UPSTREAM must start with http:// or https://: {0}")]
    InvalidUpstream(String),
}

/// Runtime configuration for the host binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`, default 3000).
    pub port: u16,
    /// Base URL of the external recipe API (`API_UPSTREAM`), without a
    /// trailing slash.
    pub api_upstream: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable `PORT` or a malformed
    /// `API_UPSTREAM`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok(), std::env::var("API_UPSTREAM").ok())
    }

    fn from_vars(port: Option<String>, upstream: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_upstream = normalize_upstream(upstream.as_deref().unwrap_or(DEFAULT_UPSTREAM))?;
        Ok(Self { port, api_upstream })
    }
}

/// Validate the upstream URL and strip any trailing slashes so joined
/// paths never double up.
fn normalize_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ConfigError::InvalidUpstream(trimmed.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
