use serde_json::{json, Value};
use tracing::info;

use crate::protocol::{HandlerError, InitializeParams};

/// Protocol revision negotiated with every client.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Advertised server identity.
pub const SERVER_NAME: &str = "sap-automation";

/// Handle an `initialize` request.
///
/// Params are decoded once here; a non-object `params` is the only shape
/// this handler rejects. The decoded fields are logged for observability and
/// otherwise unused — the negotiated envelope is fixed.
pub async fn handle(params: &Option<Value>) -> Result<Value, HandlerError> {
    let params: InitializeParams = match params {
        None => InitializeParams::default(),
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone()).map_err(|e| {
            HandlerError::InvalidParams {
                method: "initialize",
                detail: e.to_string(),
            }
        })?,
        Some(other) => {
            return Err(HandlerError::ParamsNotObject(json_type(other).to_string()));
        }
    };

    let client = params.client_info.unwrap_or_default();
    info!(
        protocol_version = params.protocol_version.as_deref().unwrap_or(PROTOCOL_VERSION),
        client_name = client.name.as_deref().unwrap_or("unknown"),
        client_version = client.version.as_deref().unwrap_or("unknown"),
        capabilities = params.capabilities.map_or(0, |c| c.len()),
        "initialize requested"
    );

    Ok(json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
