//! Connection and session management mocks.

use serde_json::{Map, Value};

use super::{session_arg, str_arg};

pub(super) fn connect(args: &Map<String, Value>) -> String {
    let system_id = str_arg(args, "system_id", "DEV");
    let client = str_arg(args, "client", "100");
    let server = str_arg(args, "server", "localhost");
    let language = str_arg(args, "language", "EN");
    format!(
        "Successfully connected to SAP system {system_id} client {client} \
         on server {server} with language {language}"
    )
}

pub(super) fn disconnect(args: &Map<String, Value>) -> String {
    let session_id = session_arg(args);
    format!("Successfully disconnected from SAP session {session_id}")
}

pub(super) fn get_sessions(_args: &Map<String, Value>) -> String {
    let sessions = ["Session[0] - DEV/100", "Session[1] - QAS/100"];
    format!("Active SAP sessions: {}", sessions.join(", "))
}
