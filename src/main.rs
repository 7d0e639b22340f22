use sap_automation_mcp::config::ServerConfig;
use sap_automation_mcp::logging;
use sap_automation_mcp::server::McpServer;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_logging();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("sap-automation-mcp: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(config);
    if let Err(e) = server.run().await {
        eprintln!("sap-automation-mcp: fatal error: {e}");
        std::process::exit(1);
    }
}
