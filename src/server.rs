use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::handlers::Dispatcher;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::tools::ToolRegistry;

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
///
/// Strictly sequential: one request is fully decoded, dispatched, and
/// answered before the next line is read, so responses leave in arrival
/// order. Per-line failures are answered (or logged) and the loop resumes;
/// only end-of-stream or a stream-level I/O failure ends it.
pub struct McpServer {
    config: ServerConfig,
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(ToolRegistry::new()),
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut raw = Vec::new();

        info!("SAP automation MCP server starting");

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }

            if n > self.config.max_message_bytes {
                warn!(
                    bytes = n,
                    limit = self.config.max_message_bytes,
                    "message too large"
                );
                write_response(
                    &mut stdout,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    warn!("input line is not valid UTF-8");
                    write_response(
                        &mut stdout,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            debug!(line = trimmed, "recv");

            // No valid id can be recovered from an undecodable line, so the
            // parse-error response always carries a null id.
            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    write_response(
                        &mut stdout,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if let Some(resp) = self.dispatcher.dispatch(&req).await {
                write_response(&mut stdout, &resp).await?;
            }
        }

        info!("stdin closed, server shutting down");
        Ok(())
    }
}

async fn write_response(
    stdout: &mut tokio::io::Stdout,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(resp)?;
    debug!(line = %out, "send");
    stdout.write_all(out.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
