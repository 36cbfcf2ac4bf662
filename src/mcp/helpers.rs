//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication and for
//! shaping tool results.

use crate::error::ToolError;
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Wraps an operation payload as an MCP tool result.
///
/// The payload travels as one text block holding its JSON serialisation.
/// `structuredContent` must be an object, so arrays and scalars are nested
/// under `result`.
pub fn tool_result(payload: Value) -> Result<Value, ToolError> {
    let text = serde_json::to_string(&payload)?;
    let structured = if payload.is_object() {
        payload
    } else {
        json!({ "result": payload })
    };

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": structured,
        "isError": false,
    }))
}
