use serde_json::{json, Value};

use crate::protocol::HandlerError;
use crate::tools::{ToolDescriptor, ToolRegistry};

/// Handle a `tools/list` request.
///
/// Returns the full catalog in registry order. Pure and deterministic:
/// repeated calls return an identical collection regardless of any
/// `tools/call` traffic in between.
pub async fn handle(registry: &ToolRegistry) -> Result<Value, HandlerError> {
    let tools: Vec<&ToolDescriptor> = registry.descriptors().collect();
    Ok(json!({ "tools": tools }))
}
