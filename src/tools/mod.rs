//! MCP tool implementations for Scout.
//!
//! This module contains the input types and helper functions for
//! MCP tools that expose Help Scout operations.

mod inputs;

pub use inputs::*;
