//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the JSON-RPC endpoint of the restaurant server and
//! the protocol-level methods (handshake, discovery, resources). Tool
//! execution lives in [`super::tools`].

use super::{helpers::*, models::*, tools::*};
use crate::state::{AppState, SharedState};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse,
    },
    routing::post,
    Json, Router,
};
use futures_util::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::convert::Infallible;

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    Sse::new(stream::once(async {
        Ok::<_, Infallible>(Event::default().event("endpoint").data("/mcp"))
    }))
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "JSON-RPC parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = method_name, id = %id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, json!({ "tools": tool_definitions() })),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => match handle_resources_read(&state, params) {
            Ok(result) => rpc_success(id, result),
            Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
        },
        "tools/call" => match decode_params::<ToolCallParams>(params) {
            Ok(call) => {
                let args = call.arguments.unwrap_or(Value::Null);
                match handle_tool_call(&state, &call.name, args) {
                    Ok(result) => rpc_success(id, result),
                    Err(err) => rpc_error(id, err.code(), err.to_string()),
                }
            }
            Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
        },
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!(method = method_name, "unknown method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

/// Decodes method params; missing params decode as the type's default.
fn decode_params<T: DeserializeOwned + Default>(params: Value) -> Result<T, String> {
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params).map_err(|e| format!("Invalid params: {}", e))
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "name": "Restaurant menu",
            "uri": MENU_RESOURCE_URI,
            "mimeType": MENU_RESOURCE_MIME_TYPE,
            "description": "Every item on the menu as a JSON array."
        }]
    })
}

/// Handles `resources/read` request. A missing `uri` reads the menu.
fn handle_resources_read(state: &AppState, params: Value) -> Result<Value, String> {
    let read: ResourceReadParams = decode_params(params)?;
    let uri = read.uri.as_deref().unwrap_or(MENU_RESOURCE_URI);
    if uri != MENU_RESOURCE_URI {
        return Err(format!("Unknown resource: {}", uri));
    }

    let text = serde_json::to_string(state.catalog.items())
        .map_err(|e| format!("Failed to encode menu: {}", e))?;

    Ok(json!({
        "contents": [{
            "uri": MENU_RESOURCE_URI,
            "mimeType": MENU_RESOURCE_MIME_TYPE,
            "text": text
        }]
    }))
}
