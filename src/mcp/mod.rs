//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, tool names, constants)
//! - RPC helpers (success/error envelopes, tool result shaping)
//! - Tool definitions and dispatch
//! - MCP handlers (initialize, tools/list, tools/call, resources, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod tools;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use tools::handle_tool_call;
