//! Field read/write mocks.

use serde_json::{Map, Value};

use super::{session_arg, str_arg};

pub(super) fn input_field(args: &Map<String, Value>) -> String {
    let field_id = str_arg(args, "field_id", "FIELD");
    let value = str_arg(args, "value", "");
    let session_id = session_arg(args);
    format!("Successfully input '{value}' into field '{field_id}' in session {session_id}")
}

pub(super) fn get_field_value(args: &Map<String, Value>) -> String {
    let field_id = str_arg(args, "field_id", "FIELD");
    let session_id = session_arg(args);
    let mock_value = format!("VALUE_FROM_{field_id}");
    format!("Field '{field_id}' value: '{mock_value}' in session {session_id}")
}

pub(super) fn clear_field(args: &Map<String, Value>) -> String {
    let field_id = str_arg(args, "field_id", "FIELD");
    let session_id = session_arg(args);
    format!("Successfully cleared field '{field_id}' in session {session_id}")
}
