pub mod method;
pub mod request;
pub mod response;

pub use method::Method;
pub use request::{ClientInfo, InitializeParams, JsonRpcRequest, RpcId, ToolCallParams};
pub use response::{HandlerError, JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};
