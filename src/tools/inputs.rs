//! Tool input parameter structs for MCP tools.
//!
//! This module defines the input types for each MCP tool, with
//! JSON Schema derivation for MCP tool discovery.
//!
//! # Input Sanitization
//!
//! All input structs implement `sanitize()` which trims whitespace
//! from string fields. This should be called before processing input.

use std::collections::BTreeMap;

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

/// Default number of conversations returned by list_conversations.
pub const DEFAULT_LIST_LIMIT: usize = 25;

/// Helper function to trim an optional string.
fn trim_option(s: &Option<String>) -> Option<String> {
    s.as_ref().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Input parameters for the list_conversations tool.
///
/// All fields are optional - use them to filter the results.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListConversationsInput {
    /// Filter by mailbox ID.
    #[serde(default)]
    pub mailbox: Option<String>,

    /// Filter by conversation status (e.g., "active", "closed", "pending").
    #[serde(default)]
    pub status: Option<String>,

    /// Maximum number of conversations to return (default: 25, 0 for all).
    #[serde(default)]
    pub limit: Option<usize>,

    /// Additional query parameters passed through to the API verbatim.
    /// Keys that collide with mailbox or status take precedence.
    #[serde(default)]
    pub extra_params: Option<BTreeMap<String, String>>,
}

impl ListConversationsInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            mailbox: trim_option(&self.mailbox),
            status: trim_option(&self.status),
            limit: self.limit,
            extra_params: self.extra_params,
        }
    }
}

/// Input parameters for the get_conversation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetConversationInput {
    /// The unique ID of the conversation to retrieve.
    pub conversation_id: String,

    /// If true, include the conversation threads in the response.
    #[serde(default)]
    pub embed_threads: Option<bool>,
}

impl GetConversationInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            conversation_id: self.conversation_id.trim().to_string(),
            embed_threads: self.embed_threads,
        }
    }
}
