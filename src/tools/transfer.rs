//! Data export/import mocks.

use serde_json::{Map, Value};

use super::{session_arg, str_arg};

pub(super) fn export_data(args: &Map<String, Value>) -> String {
    let data_source = str_arg(args, "data_source", "TABLE");
    let format = str_arg(args, "format", "csv");
    let filename = str_arg(args, "filename", "export.csv");
    let session_id = session_arg(args);
    format!(
        "Exported data from '{data_source}' to '{filename}' in {format} format \
         from session {session_id}"
    )
}

pub(super) fn import_data(args: &Map<String, Value>) -> String {
    let filename = str_arg(args, "filename", "import.csv");
    let target = str_arg(args, "target", "TABLE");
    let mapping = args
        .get("mapping")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    let session_id = session_arg(args);
    format!(
        "Imported data from '{filename}' to '{target}' with mapping {mapping} \
         in session {session_id}"
    )
}
