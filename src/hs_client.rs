//! HTTP client for the Help Scout Mailbox API.
//!
//! This module provides the `HelpScoutClient` struct for making authenticated
//! requests to the Help Scout REST API.
//!
//! # Lifecycle
//!
//! A client owns one authenticated `reqwest::Client`. The server constructs
//! a fresh client per tool invocation and drops it when the invocation
//! scope exits, so the underlying session is released on every path,
//! success or error. Every call is a single round trip: no retries, no
//! caching, no pagination.
//!
//! # Security
//!
//! The API token is never logged. Error bodies are sanitized before they
//! leave this module.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::ScoutError;

/// Maximum length for HTTP error response bodies to avoid leaking verbose
/// upstream internals.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Timeout ceilings for the HTTP session.
///
/// Four independent ceilings rather than one aggregate deadline. reqwest
/// exposes no discrete write-timeout or pool-acquire knob: the write
/// ceiling is folded into the total per-request timeout and the pool
/// ceiling maps to the pool idle timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutPolicy {
    /// Connection establishment ceiling.
    pub connect: Duration,
    /// Response read ceiling.
    pub read: Duration,
    /// Request write ceiling.
    pub write: Duration,
    /// Connection pool ceiling.
    pub pool: Duration,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            read: Duration::from_secs(30),
            write: Duration::from_secs(30),
            pool: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the Help Scout Mailbox API.
///
/// Handles authentication, request formatting, and response decoding for
/// the conversation endpoints. Payloads are passed through as opaque JSON.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = HelpScoutClient::new(&config.api_token, &config.base_url)?;
///
/// let conversations = client.list_conversations(None, Some("active"), &BTreeMap::new()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HelpScoutClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the Help Scout API.
    base_url: Url,

    /// Bearer token for authentication.
    /// SECURITY: Never log this value!
    api_token: String,
}

impl HelpScoutClient {
    /// Creates a new Help Scout client with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::HttpClient` if the HTTP client fails to
    /// initialize, or `ScoutError::Config` if the token cannot be encoded
    /// as a header value.
    pub fn new(api_token: &str, base_url: &Url) -> Result<Self, ScoutError> {
        Self::with_timeouts(api_token, base_url, TimeoutPolicy::default())
    }

    /// Creates a new Help Scout client with an explicit timeout policy.
    ///
    /// The session carries `Authorization: Bearer <token>` and
    /// `Content-Type: application/json` as default headers on every request.
    pub fn with_timeouts(
        api_token: &str,
        base_url: &Url,
        timeouts: TimeoutPolicy,
    ) -> Result<Self, ScoutError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_token))
            .map_err(|_| ScoutError::invalid_config("API token contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .timeout(timeouts.read + timeouts.write)
            .pool_idle_timeout(timeouts.pool)
            .build()
            .map_err(ScoutError::HttpClient)?;

        Ok(Self {
            http,
            base_url: base_url.clone(),
            api_token: api_token.to_string(),
        })
    }

    /// Returns a reference to the API token for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub(crate) fn api_token_for_sanitization(&self) -> &str {
        &self.api_token
    }

    /// Lists conversations, optionally filtered by mailbox and status.
    ///
    /// Extra parameters are merged after the named ones, so an extra key
    /// that collides with `mailbox` or `status` overrides it.
    ///
    /// # Returns
    ///
    /// The parsed JSON body exactly as received, envelope included.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::UpstreamStatus` for any non-2xx response and
    /// `ScoutError::Transport` for connection or timeout failures.
    pub async fn list_conversations(
        &self,
        mailbox: Option<&str>,
        status: Option<&str>,
        extra: &BTreeMap<String, String>,
    ) -> Result<Value, ScoutError> {
        let params = build_list_query(mailbox, status, extra);
        self.get("/v2/conversations", &params).await
    }

    /// Gets a single conversation by ID.
    ///
    /// The ID is used verbatim as a path segment, percent-encoded so
    /// reserved characters cannot alter the request path. Its shape is not
    /// validated otherwise.
    ///
    /// # Arguments
    ///
    /// * `conversation_id` - The conversation to fetch
    /// * `embed_threads` - If true, asks the API to embed thread data via
    ///   `embed=threads`
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
        embed_threads: bool,
    ) -> Result<Value, ScoutError> {
        let path = format!(
            "/v2/conversations/{}",
            urlencoding::encode(conversation_id)
        );

        let mut params = BTreeMap::new();
        if embed_threads {
            params.insert("embed".to_string(), "threads".to_string());
        }

        self.get(&path, &params).await
    }

    /// Makes a GET request against the configured base URL.
    ///
    /// An empty query map produces a request with no query string.
    async fn get(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Value, ScoutError> {
        let url = self.base_url.join(path).map_err(|e| {
            ScoutError::invalid_config(format!("invalid request path {}: {}", path, e))
        })?;

        tracing::debug!(path = %path, "Making Help Scout API request");

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(ScoutError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = ScoutError::sanitize_message(&body, &self.api_token);
            let body = truncate_error_body(&body);
            return Err(ScoutError::UpstreamStatus { status, body });
        }

        let body = response.text().await.map_err(ScoutError::Transport)?;

        tracing::trace!(body = %body, "Help Scout API response");

        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

/// Truncates an upstream error body to `MAX_ERROR_BODY_LEN` bytes.
///
/// The cut point backs up to a UTF-8 character boundary so a multibyte
/// character straddling the limit cannot panic the slice.
fn truncate_error_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

/// Builds the query map for the list endpoint.
///
/// Named parameters first, then extras applied on top (extras win on
/// collision).
fn build_list_query(
    mailbox: Option<&str>,
    status: Option<&str>,
    extra: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    if let Some(mailbox) = mailbox {
        params.insert("mailbox".to_string(), mailbox.to_string());
    }
    if let Some(status) = status {
        params.insert("status".to_string(), status.to_string());
    }

    for (key, value) in extra {
        params.insert(key.clone(), value.clone());
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://api.helpscout.net").unwrap()
    }

    #[test]
    fn test_timeout_policy_defaults() {
        let policy = TimeoutPolicy::default();
        assert_eq!(policy.connect, Duration::from_secs(10));
        assert_eq!(policy.read, Duration::from_secs(30));
        assert_eq!(policy.write, Duration::from_secs(30));
        assert_eq!(policy.pool, Duration::from_secs(10));
    }

    #[test]
    fn test_client_construction() {
        let client = HelpScoutClient::new("test-token", &base_url()).unwrap();
        assert_eq!(client.api_token_for_sanitization(), "test-token");
    }

    #[test]
    fn test_client_rejects_unencodable_token() {
        let result = HelpScoutClient::new("bad\ntoken", &base_url());
        assert!(matches!(result, Err(ScoutError::Config(_))));
    }

    #[test]
    fn test_build_list_query_empty() {
        let params = build_list_query(None, None, &BTreeMap::new());
        assert!(params.is_empty());
    }

    #[test]
    fn test_build_list_query_named_params() {
        let params = build_list_query(Some("123"), Some("active"), &BTreeMap::new());
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("mailbox").map(String::as_str), Some("123"));
        assert_eq!(params.get("status").map(String::as_str), Some("active"));
    }

    #[test]
    fn test_build_list_query_mailbox_only() {
        let params = build_list_query(Some("123"), None, &BTreeMap::new());
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("mailbox").map(String::as_str), Some("123"));
    }

    #[test]
    fn test_build_list_query_extras_override_named() {
        let mut extra = BTreeMap::new();
        extra.insert("status".to_string(), "closed".to_string());
        extra.insert("page".to_string(), "2".to_string());

        let params = build_list_query(Some("123"), Some("active"), &extra);
        assert_eq!(params.get("status").map(String::as_str), Some("closed"));
        assert_eq!(params.get("mailbox").map(String::as_str), Some("123"));
        assert_eq!(params.get("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_truncate_error_body_short_body_unchanged() {
        assert_eq!(truncate_error_body("short"), "short");
    }

    #[test]
    fn test_truncate_error_body_long_body_is_cut() {
        let body = "x".repeat(MAX_ERROR_BODY_LEN + 100);
        let truncated = truncate_error_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= MAX_ERROR_BODY_LEN + "...[truncated]".len());
    }

    #[test]
    fn test_truncate_error_body_multibyte_straddling_limit() {
        // 'é' occupies bytes 499..501, straddling the 500-byte ceiling
        let body = format!("{}é tail", "a".repeat(MAX_ERROR_BODY_LEN - 1));
        let truncated = truncate_error_body(&body);
        assert_eq!(truncated, format!("{}...[truncated]", "a".repeat(MAX_ERROR_BODY_LEN - 1)));
    }

    #[test]
    fn test_conversation_id_is_path_escaped() {
        // The encoded form must keep reserved characters from altering the path
        let encoded = urlencoding::encode("123/../evil?x=1");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('?'));
    }
}
