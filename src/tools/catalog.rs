//! The advertised tool catalog.
//!
//! Order matters: `tools/list` returns descriptors exactly in this order, and
//! the first few names double as the examples quoted back for unknown tool
//! calls.

use serde_json::json;

use super::{batch, controls, fields, navigation, screen, session, tables, transfer};
use super::{RegisteredTool, ToolDescriptor, ToolFn};

fn tool(name: &'static str, description: &'static str, schema: serde_json::Value, run: ToolFn) -> RegisteredTool {
    RegisteredTool {
        descriptor: ToolDescriptor {
            name,
            description,
            input_schema: schema,
        },
        run,
    }
}

pub(super) fn tools() -> Vec<RegisteredTool> {
    vec![
        // Connection & session management
        tool(
            "sap_connect",
            "Connect to SAP system with credentials",
            json!({
                "type": "object",
                "properties": {
                    "system_id": {"type": "string", "description": "SAP system ID"},
                    "client": {"type": "string", "description": "SAP client number"},
                    "username": {"type": "string", "description": "Username"},
                    "password": {"type": "string", "description": "Password"},
                    "server": {"type": "string", "description": "SAP server address"},
                    "instance": {"type": "string", "description": "Instance number", "default": "00"},
                    "language": {"type": "string", "description": "Login language", "default": "EN"}
                },
                "required": ["system_id", "client", "username", "password", "server"]
            }),
            session::connect,
        ),
        tool(
            "sap_disconnect",
            "Disconnect from SAP system",
            json!({
                "type": "object",
                "properties": {
                    "session_id": {"type": "string", "description": "Session ID to disconnect"}
                },
                "required": []
            }),
            session::disconnect,
        ),
        tool(
            "sap_get_sessions",
            "Get list of active SAP sessions",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            session::get_sessions,
        ),
        // Navigation & transaction management
        tool(
            "sap_navigate",
            "Navigate to SAP transaction",
            json!({
                "type": "object",
                "properties": {
                    "transaction_code": {"type": "string", "description": "Transaction code (e.g., VA01, MM01, SE80)"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["transaction_code"]
            }),
            navigation::navigate,
        ),
        tool(
            "sap_navigate_back",
            "Navigate back in SAP (F3 equivalent)",
            json!({
                "type": "object",
                "properties": {
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": []
            }),
            navigation::navigate_back,
        ),
        tool(
            "sap_navigate_exit",
            "Exit current transaction (F15 equivalent)",
            json!({
                "type": "object",
                "properties": {
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": []
            }),
            navigation::navigate_exit,
        ),
        // Field operations
        tool(
            "sap_input_field",
            "Input data into a specific SAP field",
            json!({
                "type": "object",
                "properties": {
                    "field_id": {"type": "string", "description": "Field ID or name"},
                    "value": {"type": "string", "description": "Value to input"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["field_id", "value"]
            }),
            fields::input_field,
        ),
        tool(
            "sap_get_field_value",
            "Get value from a specific SAP field",
            json!({
                "type": "object",
                "properties": {
                    "field_id": {"type": "string", "description": "Field ID or name"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["field_id"]
            }),
            fields::get_field_value,
        ),
        tool(
            "sap_clear_field",
            "Clear a specific SAP field",
            json!({
                "type": "object",
                "properties": {
                    "field_id": {"type": "string", "description": "Field ID or name"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["field_id"]
            }),
            fields::clear_field,
        ),
        // Button & menu operations
        tool(
            "sap_press_button",
            "Press a button in SAP GUI",
            json!({
                "type": "object",
                "properties": {
                    "button_id": {"type": "string", "description": "Button ID or name"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["button_id"]
            }),
            controls::press_button,
        ),
        tool(
            "sap_select_menu",
            "Select menu item in SAP GUI",
            json!({
                "type": "object",
                "properties": {
                    "menu_path": {"type": "string", "description": "Menu path (e.g., 'System->User Profile->Own Data')"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["menu_path"]
            }),
            controls::select_menu,
        ),
        // Function key operations
        tool(
            "sap_send_key",
            "Send function key or key combination",
            json!({
                "type": "object",
                "properties": {
                    "key": {"type": "string", "description": "Key to send (F1-F24, Enter, Escape, etc.)"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["key"]
            }),
            controls::send_key,
        ),
        // Table operations
        tool(
            "sap_get_table_data",
            "Extract data from SAP table/grid",
            json!({
                "type": "object",
                "properties": {
                    "table_id": {"type": "string", "description": "Table/grid ID"},
                    "row_start": {"type": "integer", "description": "Starting row (0-based)", "default": 0},
                    "row_count": {"type": "integer", "description": "Number of rows to extract", "default": 10},
                    "columns": {"type": "array", "items": {"type": "string"}, "description": "Specific columns to extract (optional)"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["table_id"]
            }),
            tables::get_table_data,
        ),
        tool(
            "sap_set_table_cell",
            "Set value in specific table cell",
            json!({
                "type": "object",
                "properties": {
                    "table_id": {"type": "string", "description": "Table/grid ID"},
                    "row": {"type": "integer", "description": "Row number (0-based)"},
                    "column": {"type": "string", "description": "Column name or ID"},
                    "value": {"type": "string", "description": "Value to set"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["table_id", "row", "column", "value"]
            }),
            tables::set_table_cell,
        ),
        tool(
            "sap_select_table_row",
            "Select row(s) in SAP table",
            json!({
                "type": "object",
                "properties": {
                    "table_id": {"type": "string", "description": "Table/grid ID"},
                    "row": {"type": "integer", "description": "Row number (0-based)"},
                    "multi_select": {"type": "boolean", "description": "Allow multiple selection", "default": false},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["table_id", "row"]
            }),
            tables::select_table_row,
        ),
        // Screen information
        tool(
            "sap_get_screen_info",
            "Get current screen information",
            json!({
                "type": "object",
                "properties": {
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": []
            }),
            screen::get_screen_info,
        ),
        tool(
            "sap_get_status_message",
            "Get current status bar message",
            json!({
                "type": "object",
                "properties": {
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": []
            }),
            screen::get_status_message,
        ),
        // Screenshot & visual
        tool(
            "sap_screenshot",
            "Take screenshot of SAP screen",
            json!({
                "type": "object",
                "properties": {
                    "filename": {"type": "string", "description": "Output filename", "default": "sap_screenshot.png"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": []
            }),
            screen::screenshot,
        ),
        // Advanced operations
        tool(
            "sap_execute_transaction",
            "Execute complete transaction with multiple steps",
            json!({
                "type": "object",
                "properties": {
                    "transaction_code": {"type": "string", "description": "Transaction to execute"},
                    "steps": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "action": {"type": "string", "description": "Action type (input, button, key)"},
                                "target": {"type": "string", "description": "Target field/button ID"},
                                "value": {"type": "string", "description": "Value (for input actions)"}
                            }
                        },
                        "description": "List of steps to execute"
                    },
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["transaction_code", "steps"]
            }),
            batch::execute_transaction,
        ),
        tool(
            "sap_wait_for_screen",
            "Wait for specific screen to load",
            json!({
                "type": "object",
                "properties": {
                    "screen_id": {"type": "string", "description": "Screen ID to wait for"},
                    "timeout": {"type": "integer", "description": "Timeout in seconds", "default": 30},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["screen_id"]
            }),
            batch::wait_for_screen,
        ),
        // Export & import
        tool(
            "sap_export_data",
            "Export SAP data to file",
            json!({
                "type": "object",
                "properties": {
                    "data_source": {"type": "string", "description": "Data source (table, screen, etc.)"},
                    "format": {"type": "string", "description": "Export format", "enum": ["csv", "xlsx", "txt", "xml"]},
                    "filename": {"type": "string", "description": "Output filename"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["data_source", "format", "filename"]
            }),
            transfer::export_data,
        ),
        tool(
            "sap_import_data",
            "Import data into SAP from file",
            json!({
                "type": "object",
                "properties": {
                    "filename": {"type": "string", "description": "Input filename"},
                    "target": {"type": "string", "description": "Target field or table"},
                    "mapping": {"type": "object", "description": "Field mapping configuration"},
                    "session_id": {"type": "string", "description": "Session ID", "default": "default"}
                },
                "required": ["filename", "target"]
            }),
            transfer::import_data,
        ),
    ]
}
