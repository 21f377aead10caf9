//! Configuration management for the Scout MCP server.
//!
//! This module handles loading configuration from environment variables,
//! with validation of the base endpoint at load time so malformed URLs
//! never surface as request-time failures.

use crate::error::ScoutError;
use std::env;
use url::Url;

/// Environment variable holding the Help Scout API token.
const TOKEN_ENV: &str = "HELPSCOUT_API_TOKEN";

/// Environment variable overriding the Help Scout API base URL.
const URL_ENV: &str = "HELPSCOUT_API_URL";

/// Default base URL for the Help Scout Mailbox API.
const DEFAULT_API_URL: &str = "https://api.helpscout.net";

/// Configuration for connecting to Help Scout.
///
/// Loaded once at startup and passed to the server; immutable afterwards.
/// The API token is stored but never logged or exposed in error messages.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for authentication.
    /// This value must never be logged or included in error messages.
    pub api_token: String,

    /// Base URL for the Help Scout API (default `https://api.helpscout.net`).
    pub base_url: Url,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HELPSCOUT_API_TOKEN`: Bearer token. Absent means an empty token,
    ///   which is not an error here - the tools reject calls without one.
    /// - `HELPSCOUT_API_URL`: Base URL override. Absent means the default
    ///   `https://api.helpscout.net`.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` if the base URL is not a well-formed
    /// absolute URL.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ScoutError> {
        let api_token = env::var(TOKEN_ENV).unwrap_or_default();
        let base_url = env::var(URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::from_parts(api_token, &base_url)
    }

    /// Builds a configuration from explicit values, validating the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` if `base_url` does not parse as an
    /// absolute URL.
    pub fn from_parts(api_token: String, base_url: &str) -> Result<Self, ScoutError> {
        let base_url = Self::validate_base_url(base_url)?;
        Ok(Config {
            api_token,
            base_url,
        })
    }

    /// Validates the base URL is well-formed and absolute.
    fn validate_base_url(raw: &str) -> Result<Url, ScoutError> {
        let raw = raw.trim().trim_end_matches('/');

        Url::parse(raw).map_err(|e| {
            ScoutError::invalid_config(format!("{} is not a valid absolute URL: {}", URL_ENV, e))
        })
    }

    /// Returns true if an API token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }
}
