use serde::Serialize;
use serde_json::Value;

use super::request::RpcId;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
///
/// `id` is always serialized; a missing request id comes back as `"id":null`.
/// Exactly one of `result`/`error` is present.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object (protocol-level errors).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self {
            code: -32700,
            message: "Parse error".into(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    /// Handler-failure error: fixed message, the underlying description
    /// carried in `data` for structured clients.
    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: "Invalid request parameters".into(),
            data: Some(Value::String(detail.into())),
        }
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// MCP tool call result wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Handler failure channel
// ---------------------------------------------------------------------------

/// Failure raised by a method handler.
///
/// Every variant is caught at the dispatch boundary and converted into a
/// `-32602` response with the description in `data`; no handler failure may
/// terminate the process or suppress a response.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("params must be an object: {0}")]
    ParamsNotObject(String),
    #[error("missing params for {0}")]
    MissingParams(&'static str),
    #[error("invalid params for {method}: {detail}")]
    InvalidParams {
        method: &'static str,
        detail: String,
    },
}

impl From<HandlerError> for JsonRpcError {
    fn from(err: HandlerError) -> Self {
        JsonRpcError::invalid_params(err.to_string())
    }
}
