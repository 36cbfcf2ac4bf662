//! MCP Tool Surface
//!
//! Declares the restaurant tools advertised by `tools/list` and dispatches
//! `tools/call` invocations to the catalog, session store and order store.
//! Domain failures come back as `{ "error": ... }` payloads; only unknown
//! tools and malformed arguments fail the call.

use super::{helpers::tool_result, models::*};
use crate::{
    cart::models::{AddToCartInput, RemoveFromCartInput, SessionInput},
    error::{ShopError, ToolError},
    menu::SearchCriteria,
    orders::models::{CheckoutInput, OrderLookupInput},
    state::AppState,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, ToolError> {
    tracing::debug!(tool = name, "tool call");

    let payload = match name {
        GET_MENU_CATEGORIES => encode(&state.catalog.categories())?,
        LIST_ITEMS_BY_CATEGORY => {
            let input: CategoryInput = parse_args(args)?;
            encode(&state.catalog.by_category(&input.category))?
        }
        GET_ITEM_DETAILS => {
            let input: ItemLookupInput = parse_args(args)?;
            outcome(
                state
                    .catalog
                    .lookup(&input.item_identifier)
                    .ok_or_else(|| ShopError::ItemNotFound(input.item_identifier.clone())),
            )?
        }
        FIND_ITEMS_BY_CRITERIA => {
            let criteria: SearchCriteria = parse_args(args)?;
            encode(&state.catalog.search(&criteria))?
        }
        CREATE_CART => encode(&state.sessions.create())?,
        ADD_TO_CART => {
            let input: AddToCartInput = parse_args(args)?;
            outcome(state.sessions.add_item(
                &state.catalog,
                &input.session_id,
                &input.item_id,
                input.quantity,
            ))?
        }
        REMOVE_FROM_CART => {
            let input: RemoveFromCartInput = parse_args(args)?;
            outcome(state.sessions.remove_item(&input.session_id, &input.item_id))?
        }
        GET_CART => {
            let input: SessionInput = parse_args(args)?;
            outcome(state.sessions.cart(&input.session_id))?
        }
        CHECKOUT => {
            let input: CheckoutInput = parse_args(args)?;
            outcome(state.orders.checkout(&state.sessions, input))?
        }
        GET_ORDER_STATUS => {
            let input: OrderLookupInput = parse_args(args)?;
            outcome(
                state
                    .orders
                    .get(&input.order_id)
                    .map(|order| json!({ "order": order })),
            )?
        }
        LIST_ORDERS => encode(&state.orders.list())?,
        _ => {
            tracing::warn!(tool = name, "unknown tool");
            return Err(ToolError::UnknownTool(name.to_string()));
        }
    };

    tool_result(payload)
}

/// Decodes tool arguments; an absent argument object counts as empty.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    Ok(serde_json::to_value(value)?)
}

/// Success payloads are serialised as-is, failures as `{ "error": ... }`.
fn outcome<T: Serialize>(result: Result<T, ShopError>) -> Result<Value, ToolError> {
    match result {
        Ok(value) => encode(&value),
        Err(err) => {
            tracing::debug!(error = %err, "tool returned error payload");
            Ok(err.to_payload())
        }
    }
}

/// Tool descriptors returned by `tools/list`.
pub fn tool_definitions() -> Vec<Value> {
    let session_id = json!({ "type": "string", "description": "Cart session identifier" });

    vec![
        json!({
            "name": GET_MENU_CATEGORIES,
            "title": "Menu categories",
            "description": "Return all available menu categories.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": LIST_ITEMS_BY_CATEGORY,
            "title": "Items by category",
            "description": "List all menu items in a specific category.",
            "inputSchema": {
                "type": "object",
                "properties": { "category": { "type": "string" } },
                "required": ["category"]
            }
        }),
        json!({
            "name": GET_ITEM_DETAILS,
            "title": "Item details",
            "description": "Get detailed information about a specific menu item by id or name.",
            "inputSchema": {
                "type": "object",
                "properties": { "item_identifier": { "type": "string" } },
                "required": ["item_identifier"]
            }
        }),
        json!({
            "name": FIND_ITEMS_BY_CRITERIA,
            "title": "Find items",
            "description": "Find menu items based on dietary preference, price, allergens, or category.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "dietary_preference": {
                        "type": "string",
                        "description": "One of vegetarian, vegan, gluten_free"
                    },
                    "max_price": { "type": "number" },
                    "exclude_allergens": { "type": "array", "items": { "type": "string" } },
                    "category": { "type": "string" }
                }
            }
        }),
        json!({
            "name": CREATE_CART,
            "title": "Create cart",
            "description": "Create a new empty cart/session and return its session_id.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": ADD_TO_CART,
            "title": "Add to cart",
            "description": "Add an item to the cart for a session.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "session_id": session_id,
                    "item_id": { "type": "string" },
                    "quantity": { "type": "integer", "default": 1 }
                },
                "required": ["session_id", "item_id"]
            }
        }),
        json!({
            "name": REMOVE_FROM_CART,
            "title": "Remove from cart",
            "description": "Remove an item from the cart for a session.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "session_id": session_id,
                    "item_id": { "type": "string" }
                },
                "required": ["session_id", "item_id"]
            }
        }),
        json!({
            "name": GET_CART,
            "title": "Get cart",
            "description": "Get contents of the current cart for a session.",
            "inputSchema": {
                "type": "object",
                "properties": { "session_id": session_id },
                "required": ["session_id"]
            }
        }),
        json!({
            "name": CHECKOUT,
            "title": "Checkout",
            "description": "Process the checkout for a session's cart and create an order.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "session_id": session_id,
                    "customer_info": { "type": "object" },
                    "payment_info": {
                        "type": "object",
                        "properties": { "method": { "type": "string" } }
                    }
                },
                "required": ["session_id"]
            }
        }),
        json!({
            "name": GET_ORDER_STATUS,
            "title": "Order status",
            "description": "Get the status of a specific order.",
            "inputSchema": {
                "type": "object",
                "properties": { "order_id": { "type": "string" } },
                "required": ["order_id"]
            }
        }),
        json!({
            "name": LIST_ORDERS,
            "title": "List orders",
            "description": "List all orders.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
    ]
}
