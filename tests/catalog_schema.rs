//! Schema harness over the tool catalog.
//!
//! Proves every advertised `inputSchema` is a compilable JSON Schema
//! (draft 2020-12) and that canonical sample arguments validate.

use sap_automation_mcp::schema::{compile_tool_schema, validate_arguments};
use sap_automation_mcp::tools::ToolRegistry;
use serde_json::json;

#[test]
fn every_input_schema_compiles() {
    let registry = ToolRegistry::new();

    for descriptor in registry.descriptors() {
        compile_tool_schema(&descriptor.input_schema).unwrap_or_else(|e| {
            panic!("inputSchema for {} failed to compile: {e}", descriptor.name)
        });
    }
}

#[test]
fn catalog_names_are_unique_and_ordered() {
    let registry = ToolRegistry::new();
    let names: Vec<&str> = registry.descriptors().map(|d| d.name).collect();

    assert_eq!(names.len(), 22);

    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len(), "tool names must be unique");

    assert_eq!(
        &names[..4],
        &["sap_connect", "sap_disconnect", "sap_get_sessions", "sap_navigate"],
        "catalog order is part of the contract"
    );
}

#[test]
fn connect_arguments_validate_against_schema() {
    let registry = ToolRegistry::new();
    let connect = registry.by_name("sap_connect").unwrap();

    let valid = json!({
        "system_id": "DEV",
        "client": "100",
        "username": "user",
        "password": "secret",
        "server": "sap.example.com"
    });
    validate_arguments(&connect.input_schema, &valid).unwrap();

    let missing_required = json!({"system_id": "DEV"});
    assert!(
        validate_arguments(&connect.input_schema, &missing_required).is_err(),
        "schema must require the connection credentials"
    );
}

#[test]
fn table_arguments_validate_against_schema() {
    let registry = ToolRegistry::new();
    let get_table = registry.by_name("sap_get_table_data").unwrap();

    let valid = json!({
        "table_id": "GRID1",
        "row_start": 0,
        "row_count": 5,
        "columns": ["MATNR", "MAKTX"]
    });
    validate_arguments(&get_table.input_schema, &valid).unwrap();

    let wrong_type = json!({"table_id": "GRID1", "row_count": "five"});
    assert!(validate_arguments(&get_table.input_schema, &wrong_type).is_err());
}

#[test]
fn execute_transaction_steps_validate_against_schema() {
    let registry = ToolRegistry::new();
    let execute = registry.by_name("sap_execute_transaction").unwrap();

    let valid = json!({
        "transaction_code": "VA01",
        "steps": [
            {"action": "input", "target": "VBAK-AUART", "value": "OR"},
            {"action": "key", "target": "wnd[0]", "value": "Enter"}
        ]
    });
    validate_arguments(&execute.input_schema, &valid).unwrap();
}

#[test]
fn by_name_is_exact_match_only() {
    let registry = ToolRegistry::new();
    assert!(registry.by_name("sap_connect").is_some());
    assert!(registry.by_name("SAP_CONNECT").is_none());
    assert!(registry.by_name("sap_connect ").is_none());
    assert!(registry.by_name("connect").is_none());
}
