//! Error types for the Scout MCP server.
//!
//! This module defines `ScoutError`, the unified error type used throughout
//! the application for consistent error handling and propagation.
//!
//! # Security
//!
//! All error messages are sanitized to ensure the API token is never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use thiserror::Error;

/// Unified error type for all Scout operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like the API token.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Configuration error - invalid base URL at load time, or a missing
    /// API token at call time.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Transport-level failure during the HTTP call: connection refused,
    /// DNS resolution, or a timeout.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The Help Scout API returned a non-success status code.
    #[error("upstream HTTP {status}: {body}")]
    UpstreamStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ScoutError::Config(message.into())
    }

    /// Creates the error raised when a tool is invoked without a token.
    pub fn token_not_configured() -> Self {
        ScoutError::Config("API token not configured".to_string())
    }

    /// Sanitizes an error message to remove any occurrence of the API token.
    ///
    /// This is critical for security - the token must never appear in logs,
    /// error messages, or responses to users.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_token` - The token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_token: &str) -> String {
        if api_token.is_empty() {
            return message.to_string();
        }
        message.replace(api_token, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    ///
    /// Use this when you need to include error details in logs or responses
    /// and want to ensure no sensitive data is leaked.
    #[must_use]
    pub fn sanitized_display(&self, api_token: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_token)
    }
}
