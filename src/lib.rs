//! MCP server for mock SAP GUI automation.
//!
//! Speaks JSON-RPC 2.0 over newline-delimited stdio (`initialize`,
//! `notifications/initialized`, `tools/list`, `tools/call`) and exposes a
//! catalog of SAP GUI automation tools returning templated mock text,
//! compatible with any MCP-aware AI agent.

pub mod config;
pub mod handlers;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod tools;

pub mod schema;
