//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier
pub const SERVER_NAME: &str = "restaurant-mcp-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// URI of the catalog resource
pub const MENU_RESOURCE_URI: &str = "menu://items";
/// MIME type of the catalog resource
pub const MENU_RESOURCE_MIME_TYPE: &str = "application/json";

// Tool names
pub const GET_MENU_CATEGORIES: &str = "get_menu_categories";
pub const LIST_ITEMS_BY_CATEGORY: &str = "list_items_by_category";
pub const GET_ITEM_DETAILS: &str = "get_item_details";
pub const FIND_ITEMS_BY_CRITERIA: &str = "find_items_by_criteria";
pub const CREATE_CART: &str = "create_cart";
pub const ADD_TO_CART: &str = "add_to_cart";
pub const REMOVE_FROM_CART: &str = "remove_from_cart";
pub const GET_CART: &str = "get_cart";
pub const CHECKOUT: &str = "checkout";
pub const GET_ORDER_STATUS: &str = "get_order_status";
pub const LIST_ORDERS: &str = "list_orders";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Parameters of `tools/call`
#[derive(Debug, Default, Deserialize)]
pub struct ToolCallParams {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Parameters of `resources/read`
#[derive(Debug, Default, Deserialize)]
pub struct ResourceReadParams {
    #[serde(default)]
    pub uri: Option<String>,
}

/// Arguments of `list_items_by_category`
#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub category: String,
}

/// Arguments of `get_item_details`
#[derive(Debug, Deserialize)]
pub struct ItemLookupInput {
    pub item_identifier: String,
}
