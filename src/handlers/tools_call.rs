use serde_json::Value;
use tracing::debug;

use crate::protocol::{HandlerError, ToolCallParams, ToolResult};
use crate::tools::ToolRegistry;

/// Handle a `tools/call` request.
///
/// An unrecognized tool name is a domain-level outcome, not a transport
/// error: it produces a *successful* result whose text names the tool and
/// quotes a few valid identifiers. Only an ill-shaped params object reaches
/// the error boundary.
pub async fn handle(params: &Option<Value>, registry: &ToolRegistry) -> Result<Value, HandlerError> {
    let call: ToolCallParams = match params {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| HandlerError::InvalidParams {
            method: "tools/call",
            detail: e.to_string(),
        })?,
        None => return Err(HandlerError::MissingParams("tools/call")),
    };

    let arguments = call.arguments.unwrap_or_default();
    debug!(tool = %call.name, arguments = arguments.len(), "executing tool");

    let text = match registry.invoke(&call.name, &arguments) {
        Some(text) => text,
        None => unknown_tool_text(&call.name, registry),
    };

    let result = ToolResult::text(text);
    Ok(serde_json::to_value(&result).expect("ToolResult must serialize to JSON Value"))
}

fn unknown_tool_text(name: &str, registry: &ToolRegistry) -> String {
    let examples = registry.example_names(4).join(", ");
    format!("Unknown SAP tool: {name}. Available tools: {examples}, etc.")
}
