pub mod initialize;
pub mod tools_call;
pub mod tools_list;

use tracing::{debug, info, warn};

use crate::protocol::{HandlerError, JsonRpcError, JsonRpcRequest, JsonRpcResponse, Method};
use crate::tools::ToolRegistry;

/// Handshake lifecycle. Transitions once, on the first successful
/// `initialize`, and stays `Initialized` for the rest of the process. The
/// flag gates no routing behavior; it exists for protocol correctness and
/// observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
}

/// Routes decoded requests to handlers and owns all per-session state.
pub struct Dispatcher {
    registry: ToolRegistry,
    lifecycle: Lifecycle,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Dispatch a request to the appropriate handler.
    ///
    /// Returns `None` only for `notifications/initialized`; every other
    /// request — including unknown methods and failed handlers — produces
    /// exactly one response.
    pub async fn dispatch(&mut self, req: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(method) = Method::from_name(&req.method) else {
            warn!(method = %req.method, "method not found");
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::method_not_found(&req.method),
            ));
        };

        match method {
            Method::Initialize => {
                let outcome = initialize::handle(&req.params).await;
                if outcome.is_ok() {
                    match self.lifecycle {
                        Lifecycle::Uninitialized => {
                            self.lifecycle = Lifecycle::Initialized;
                            info!("session initialized");
                        }
                        Lifecycle::Initialized => {
                            debug!("stray initialize call, session already initialized");
                        }
                    }
                }
                Some(respond(req, outcome))
            }

            Method::Initialized => {
                debug!("client completed initialization handshake");
                None
            }

            Method::ToolsList => Some(respond(req, tools_list::handle(&self.registry).await)),

            Method::ToolsCall => {
                Some(respond(req, tools_call::handle(&req.params, &self.registry).await))
            }
        }
    }
}

/// Error boundary: a handler failure becomes a `-32602` response with the
/// failure's description in `data`, id preserved.
fn respond(
    req: &JsonRpcRequest,
    outcome: Result<serde_json::Value, HandlerError>,
) -> JsonRpcResponse {
    match outcome {
        Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
        Err(err) => {
            warn!(method = %req.method, error = %err, "handler failed");
            JsonRpcResponse::error(req.id.clone(), err.into())
        }
    }
}
