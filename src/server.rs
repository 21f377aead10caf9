//! MCP server implementation for Scout.
//!
//! This module defines the `ScoutServer` struct that implements the MCP
//! `ServerHandler` trait, exposing Help Scout conversation operations as
//! tools.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use serde_json::Value;

use crate::config::Config;
use crate::error::ScoutError;
use crate::hs_client::HelpScoutClient;
use crate::tools::{GetConversationInput, ListConversationsInput, DEFAULT_LIST_LIMIT};

/// The Scout MCP server.
///
/// This server exposes Help Scout conversation operations as MCP tools.
/// It holds only the immutable configuration - each tool invocation builds
/// its own `HelpScoutClient`, which is dropped when the invocation ends.
#[derive(Clone)]
pub struct ScoutServer {
    /// Immutable configuration loaded at startup.
    config: Config,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ScoutServer {
    /// Creates a new Scout server instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration with the API token and base URL
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// A simple ping tool to verify the server is running.
    ///
    /// This tool is useful for testing connectivity and validating
    /// that the MCP server is properly initialized.
    ///
    /// Returns "pong" on success.
    #[tool(description = "Test connectivity to the Scout MCP server. Returns 'pong' if the server is running correctly.")]
    fn ping(&self) -> String {
        tracing::debug!("ping tool called");
        "pong".to_string()
    }

    /// List conversations from Help Scout with optional filters.
    ///
    /// Returns the conversation summaries unwrapped from the API envelope,
    /// truncated to the requested limit.
    #[tool(description = "List Help Scout conversations. Can filter by mailbox ID and status (active, closed, pending). Returns at most `limit` conversation summaries (default 25, 0 for all).")]
    async fn list_conversations(
        &self,
        Parameters(input): Parameters<ListConversationsInput>,
    ) -> Result<String, String> {
        // Sanitize input
        let input = input.sanitize();
        tracing::debug!(?input, "list_conversations tool called");

        let client = self.client()?;

        let extra = input.extra_params.unwrap_or_default();
        let result = client
            .list_conversations(input.mailbox.as_deref(), input.status.as_deref(), &extra)
            .await
            .map_err(|e| {
                let sanitized = self.sanitize_error(&e);
                tracing::error!(error = %sanitized, "Failed to list conversations");
                format!("Failed to list conversations: {}", sanitized)
            })?;

        let conversations = extract_conversations(&result);
        let limit = input.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let conversations = apply_limit(conversations, limit);

        render_json(&Value::Array(conversations))
    }

    /// Get detailed information about a specific conversation.
    ///
    /// Returns the conversation body exactly as the API provides it.
    #[tool(description = "Get detailed information about a single Help Scout conversation. Set embed_threads to true to include the message threads.")]
    async fn get_conversation(
        &self,
        Parameters(input): Parameters<GetConversationInput>,
    ) -> Result<String, String> {
        // Sanitize input
        let input = input.sanitize();
        tracing::debug!(conversation_id = %input.conversation_id, "get_conversation tool called");

        let client = self.client()?;

        let conversation = client
            .get_conversation(
                &input.conversation_id,
                input.embed_threads.unwrap_or(false),
            )
            .await
            .map_err(|e| {
                let sanitized = self.sanitize_error(&e);
                tracing::error!(
                    error = %sanitized,
                    conversation_id = %input.conversation_id,
                    "Failed to get conversation"
                );
                format!(
                    "Failed to get conversation {}: {}",
                    input.conversation_id, sanitized
                )
            })?;

        render_json(&conversation)
    }

    /// Builds a per-invocation client, rejecting calls without a token.
    ///
    /// The token check happens before the client exists, so an unconfigured
    /// server performs no network activity at all.
    fn client(&self) -> Result<HelpScoutClient, String> {
        if !self.config.has_token() {
            return Err(ScoutError::token_not_configured().to_string());
        }

        HelpScoutClient::new(&self.config.api_token, &self.config.base_url).map_err(|e| {
            let sanitized = self.sanitize_error(&e);
            tracing::error!(error = %sanitized, "Failed to create Help Scout client");
            format!("Failed to create Help Scout client: {}", sanitized)
        })
    }

    /// Sanitizes an error message to remove the API token.
    fn sanitize_error(&self, error: &ScoutError) -> String {
        error.sanitized_display(&self.config.api_token)
    }
}

#[tool_handler]
impl ServerHandler for ScoutServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some(
            "Scout provides access to Help Scout conversations. \
             Use list_conversations to find conversations (filter by \
             mailbox and status) and get_conversation for full details, \
             optionally with embedded threads. Start with 'ping' to \
             verify connectivity."
                .into(),
        );
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}

// ============================================================================
// Response shaping helpers
// ============================================================================

/// Unwraps the conversation list from the API envelope.
///
/// Help Scout nests collections under `_embedded.conversations`. A missing
/// envelope or key yields an empty list, never an error.
fn extract_conversations(response: &Value) -> Vec<Value> {
    response
        .get("_embedded")
        .and_then(|embedded| embedded.get("conversations"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Truncates the list to the first `limit` entries, preserving upstream
/// order. A limit of zero returns the full list.
fn apply_limit(mut conversations: Vec<Value>, limit: usize) -> Vec<Value> {
    if limit > 0 {
        conversations.truncate(limit);
    }
    conversations
}

/// Renders a JSON value as the tool response text.
fn render_json(value: &Value) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to render response: {}", e))
}
