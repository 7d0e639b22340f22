/// Default maximum bytes per JSON-RPC message (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub max_message_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `SAP_MCP_MAX_MESSAGE_BYTES` (optional, default 1 MiB) — size cap per
    ///   incoming message line
    pub fn from_env() -> Result<Self, String> {
        let max_message_bytes = match std::env::var("SAP_MCP_MAX_MESSAGE_BYTES") {
            Ok(val) => val
                .parse::<usize>()
                .map_err(|_| "SAP_MCP_MAX_MESSAGE_BYTES must be a positive integer".to_string())?,
            Err(_) => DEFAULT_MAX_MESSAGE_BYTES,
        };

        Ok(Self { max_message_bytes })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}
