//! Table and grid mocks.

use serde_json::{json, Map, Value};

use super::{bool_arg, int_arg, session_arg, str_arg};

const DEFAULT_COLUMNS: [&str; 3] = ["COL1", "COL2", "COL3"];

pub(super) fn get_table_data(args: &Map<String, Value>) -> String {
    let table_id = str_arg(args, "table_id", "TABLE");
    let row_start = int_arg(args, "row_start", 0);
    let row_count = int_arg(args, "row_count", 10).max(0);
    let columns: Vec<String> = match args.get("columns").and_then(Value::as_array) {
        Some(cols) => cols
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
    };

    let mock_data: Vec<Value> = (row_start..row_start + row_count)
        .map(|i| {
            let row: Map<String, Value> = columns
                .iter()
                .map(|col| (col.clone(), json!(format!("{col}_VALUE_{i}"))))
                .collect();
            Value::Object(row)
        })
        .collect();

    let rendered = serde_json::to_string(&mock_data).unwrap_or_else(|_| "[]".into());
    format!(
        "Extracted {} rows from table '{table_id}': {rendered}",
        mock_data.len()
    )
}

pub(super) fn set_table_cell(args: &Map<String, Value>) -> String {
    let table_id = str_arg(args, "table_id", "TABLE");
    let row = int_arg(args, "row", 0);
    let column = str_arg(args, "column", "COL1");
    let value = str_arg(args, "value", "");
    let session_id = session_arg(args);
    format!(
        "Set cell [{row}][{column}] = '{value}' in table '{table_id}' in session {session_id}"
    )
}

pub(super) fn select_table_row(args: &Map<String, Value>) -> String {
    let table_id = str_arg(args, "table_id", "TABLE");
    let row = int_arg(args, "row", 0);
    let multi_select = bool_arg(args, "multi_select", false);
    let session_id = session_arg(args);
    format!(
        "Selected row {row} in table '{table_id}' (multi: {multi_select}) in session {session_id}"
    )
}
