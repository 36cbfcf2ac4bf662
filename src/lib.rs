//! Restaurant MCP Library
//!
//! This library provides the core functionality for a restaurant ordering
//! server with MCP (Model Context Protocol) support: menu browsing, per-session
//! carts and order placement.

// Domain modules
pub mod cart;
pub mod menu;
pub mod orders;

// Protocol
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod server;
pub mod state;
