//! # Scout
//!
//! Scout is an MCP (Model Context Protocol) server for the Help Scout
//! Mailbox API.
//!
//! It exposes Help Scout conversation operations as MCP tools, enabling AI
//! assistants like Claude to browse help desk conversations through natural
//! language.
//!
//! ## Features
//!
//! - **list_conversations**: List conversations, filtered by mailbox and
//!   status, trimmed to a caller-specified limit
//! - **get_conversation**: Fetch one conversation, optionally with its
//!   message threads embedded
//! - **Security**: the API token is never logged or exposed in error
//!   messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with security-conscious message sanitization
//! - [`hs_client`] - HTTP client for the Help Scout API
//! - [`server`] - MCP server implementation with tool routing
//! - [`tools`] - Tool input parameter structs
//!
//! ## Usage
//!
//! Scout is primarily used as a binary. To run:
//!
//! ```bash
//! # Set the API token
//! export HELPSCOUT_API_TOKEN=your-token
//!
//! # Run the server
//! ./scout
//! ```
//!
//! ## Configuration
//!
//! Scout reads two environment variables:
//!
//! - `HELPSCOUT_API_TOKEN`: Bearer token for the Help Scout API. May be
//!   left unset; tools then fail with a configuration error when invoked.
//! - `HELPSCOUT_API_URL`: Base URL override (default
//!   `https://api.helpscout.net`). Must be a well-formed absolute URL.
//!
//! Optional:
//! - `RUST_LOG`: Log level (e.g., `scout=debug`)
//!
//! ## Security Considerations
//!
//! The API token is stored only in memory and is:
//! - Never logged at any log level
//! - Sanitized from all error messages
//! - Not included in any tool responses
//!
//! ## Example
//!
//! Using the [`HelpScoutClient`](hs_client::HelpScoutClient) directly:
//!
//! ```ignore
//! use std::collections::BTreeMap;
//! use scout::config::Config;
//! use scout::hs_client::HelpScoutClient;
//!
//! async fn example() -> Result<(), scout::error::ScoutError> {
//!     let config = Config::from_env()?;
//!     let client = HelpScoutClient::new(&config.api_token, &config.base_url)?;
//!
//!     // List active conversations in mailbox 123
//!     let result = client
//!         .list_conversations(Some("123"), Some("active"), &BTreeMap::new())
//!         .await?;
//!     println!("{}", result);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod hs_client;
pub mod server;
pub mod tools;
