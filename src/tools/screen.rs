//! Screen inspection and screenshot mocks.

use serde_json::{json, Map, Value};

use super::{session_arg, str_arg};

pub(super) fn get_screen_info(args: &Map<String, Value>) -> String {
    let session_id = session_arg(args);
    let screen_info = json!({
        "program": "SAPMV45A",
        "screen": "4001",
        "transaction": "VA01",
        "title": "Create Sales Order"
    });
    format!("Screen info for session {session_id}: {screen_info}")
}

pub(super) fn get_status_message(args: &Map<String, Value>) -> String {
    let session_id = session_arg(args);
    let status_msg = "Document saved successfully";
    format!("Status message in session {session_id}: '{status_msg}'")
}

pub(super) fn screenshot(args: &Map<String, Value>) -> String {
    let filename = str_arg(args, "filename", "sap_screenshot.png");
    let session_id = session_arg(args);
    format!("Screenshot saved as '{filename}' from session {session_id}")
}
