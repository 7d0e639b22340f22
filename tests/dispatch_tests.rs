//! Integration tests for the dispatcher and per-method handlers.
//!
//! Tests drive the full dispatch flow through `JsonRpcRequest` values and
//! verify the protocol properties: one response per request, id echo,
//! notification suppression, and the unknown-tool-is-success contract.

use sap_automation_mcp::handlers::{Dispatcher, Lifecycle};
use sap_automation_mcp::protocol::{JsonRpcRequest, RpcId};
use sap_automation_mcp::tools::ToolRegistry;
use serde_json::{json, Value};

fn dispatcher() -> Dispatcher {
    Dispatcher::new(ToolRegistry::new())
}

fn request(method: &str, id: Option<RpcId>, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id,
        method: method.into(),
        params,
    }
}

// ---------------------------------------------------------------------------
// initialize
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialize_returns_fixed_envelope() {
    let mut dispatcher = dispatcher();
    let req = request(
        "initialize",
        Some(RpcId::Number(1)),
        Some(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "claude-desktop", "version": "0.7.1"}
        })),
    );

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert_eq!(response.id, Some(RpcId::Number(1)));

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"].as_str().unwrap(), "2024-11-05");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
    assert_eq!(result["serverInfo"]["name"].as_str().unwrap(), "sap-automation");

    assert_eq!(dispatcher.lifecycle(), Lifecycle::Initialized);
}

#[tokio::test]
async fn initialize_defaults_when_params_absent() {
    let mut dispatcher = dispatcher();
    let req = request("initialize", Some(RpcId::Number(1)), None);

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert!(response.error.is_none(), "absent params take defaults");
    assert_eq!(
        response.result.unwrap()["protocolVersion"].as_str().unwrap(),
        "2024-11-05"
    );
}

#[tokio::test]
async fn initialize_rejects_non_object_params() {
    let mut dispatcher = dispatcher();
    let req = request("initialize", Some(RpcId::Number(5)), Some(json!([1, 2, 3])));

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert_eq!(response.id, Some(RpcId::Number(5)));
    assert!(response.result.is_none());

    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert_eq!(error.message, "Invalid request parameters");
    assert!(
        error.data.unwrap().as_str().unwrap().contains("object"),
        "data should carry the underlying failure description"
    );

    assert_eq!(
        dispatcher.lifecycle(),
        Lifecycle::Uninitialized,
        "failed initialize must not transition lifecycle state"
    );
}

#[tokio::test]
async fn stray_initialize_reruns_handler() {
    let mut dispatcher = dispatcher();

    for id in 1..=3 {
        let req = request("initialize", Some(RpcId::Number(id)), Some(json!({})));
        let response = dispatcher.dispatch(&req).await.unwrap();
        assert!(response.error.is_none(), "initialize #{id} should succeed");
        assert_eq!(dispatcher.lifecycle(), Lifecycle::Initialized);
    }
}

// ---------------------------------------------------------------------------
// notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialized_notification_produces_no_response() {
    let mut dispatcher = dispatcher();
    let req = request("notifications/initialized", None, None);

    assert!(dispatcher.dispatch(&req).await.is_none());
}

#[tokio::test]
async fn idless_request_still_answered_with_null_id() {
    // Suppression is keyed on the notification method, not on id absence.
    let mut dispatcher = dispatcher();
    let req = request("tools/list", None, None);

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert_eq!(response.id, None);
    assert!(response.result.is_some());
}

// ---------------------------------------------------------------------------
// method routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_method_yields_method_not_found() {
    let mut dispatcher = dispatcher();
    let req = request("foo", Some(RpcId::Number(7)), None);

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert_eq!(response.id, Some(RpcId::Number(7)));

    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert_eq!(error.message, "Method not found: foo");
}

#[tokio::test]
async fn string_ids_are_echoed_back() {
    let mut dispatcher = dispatcher();
    let req = request("tools/list", Some(RpcId::Str("req-42".into())), None);

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert_eq!(response.id, Some(RpcId::Str("req-42".into())));
}

// ---------------------------------------------------------------------------
// tools/list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tools_list_advertises_full_catalog() {
    let mut dispatcher = dispatcher();
    let req = request("tools/list", Some(RpcId::Number(2)), None);

    let response = dispatcher.dispatch(&req).await.unwrap();
    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 22, "Should advertise all 22 SAP tools");

    for tool in tools {
        assert!(tool["name"].as_str().unwrap().starts_with("sap_"));
        assert!(!tool["description"].as_str().unwrap().is_empty());
        assert_eq!(tool["inputSchema"]["type"].as_str().unwrap(), "object");
    }

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names[0], "sap_connect");
    assert!(names.contains(&"sap_execute_transaction"));
    assert!(names.contains(&"sap_import_data"));
}

#[tokio::test]
async fn tools_list_idempotent_across_tool_calls() {
    let mut dispatcher = dispatcher();

    let list = request("tools/list", Some(RpcId::Number(1)), None);
    let first = dispatcher.dispatch(&list).await.unwrap();

    let call = request(
        "tools/call",
        Some(RpcId::Number(2)),
        Some(json!({"name": "sap_navigate", "arguments": {"transaction_code": "VA01"}})),
    );
    dispatcher.dispatch(&call).await.unwrap();

    let list_again = request("tools/list", Some(RpcId::Number(3)), None);
    let second = dispatcher.dispatch(&list_again).await.unwrap();

    assert_eq!(
        serde_json::to_string(&first.result.unwrap()).unwrap(),
        serde_json::to_string(&second.result.unwrap()).unwrap(),
        "tools/list must return an identical catalog regardless of prior calls"
    );
}

// ---------------------------------------------------------------------------
// tools/call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tools_call_connect_reports_system_id() {
    let mut dispatcher = dispatcher();
    let req = request(
        "tools/call",
        Some(RpcId::Number(4)),
        Some(json!({
            "name": "sap_connect",
            "arguments": {
                "system_id": "DEV",
                "client": "100",
                "username": "user",
                "password": "secret",
                "server": "sap.example.com"
            }
        })),
    );

    let response = dispatcher.dispatch(&req).await.unwrap();
    let result = response.result.unwrap();

    assert_eq!(result["content"][0]["type"].as_str().unwrap(), "text");
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("DEV"), "result text should name the system id");
    assert!(text.contains("sap.example.com"));
}

#[tokio::test]
async fn tools_call_unknown_tool_is_success_not_error() {
    let mut dispatcher = dispatcher();
    let req = request(
        "tools/call",
        Some(RpcId::Number(9)),
        Some(json!({"name": "sap_teleport", "arguments": {}})),
    );

    let response = dispatcher.dispatch(&req).await.unwrap();
    assert!(response.error.is_none(), "unknown tool is a domain outcome, not a protocol error");

    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Unknown SAP tool: sap_teleport"));
    assert!(text.contains("sap_connect"), "should quote example identifiers");
}

#[tokio::test]
async fn tools_call_without_params_is_invalid() {
    let mut dispatcher = dispatcher();
    let req = request("tools/call", Some(RpcId::Number(6)), None);

    let response = dispatcher.dispatch(&req).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert_eq!(error.message, "Invalid request parameters");
}

#[tokio::test]
async fn tools_call_without_name_is_invalid() {
    let mut dispatcher = dispatcher();
    let req = request(
        "tools/call",
        Some(RpcId::Number(6)),
        Some(json!({"arguments": {}})),
    );

    let response = dispatcher.dispatch(&req).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.data.unwrap().as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn tools_call_defaults_absent_arguments() {
    let mut dispatcher = dispatcher();
    let req = request(
        "tools/call",
        Some(RpcId::Number(8)),
        Some(json!({"name": "sap_navigate_back"})),
    );

    let response = dispatcher.dispatch(&req).await.unwrap();
    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert_eq!(text, "Navigated back (F3) in session default");
}
