//! Error types
//!
//! Three families of failure exist in the service:
//! - [`ShopError`] - domain failures surfaced to callers as `{ "error": ... }`
//!   payloads inside an otherwise successful reply.
//! - [`ToolError`] - failures of the call itself (unknown tool, bad arguments),
//!   mapped to JSON-RPC error envelopes.
//! - [`CatalogError`] - startup failures while loading the menu file.

use serde_json::{json, Value};
use std::path::PathBuf;

/// Domain failures returned by cart, order and catalog operations.
///
/// The `Display` text is exactly the message placed in the payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShopError {
    #[error("Invalid session ID")]
    InvalidSession,

    #[error("Item '{0}' not found")]
    ItemNotFound(String),

    #[error("Cannot checkout with empty cart")]
    EmptyCart,

    #[error("Order '{0}' not found")]
    OrderNotFound(String),
}

impl ShopError {
    /// Renders the error as the structured payload returned to the caller.
    pub fn to_payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Failures that reject a `tools/call` request outright.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ToolError {
    /// JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            Self::UnknownTool(_) | Self::InvalidArguments(_) => -32602,
            Self::Encode(_) => -32603,
        }
    }
}

/// Failures while loading the static menu at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read menu file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu data: {0}")]
    Parse(#[from] serde_json::Error),
}
