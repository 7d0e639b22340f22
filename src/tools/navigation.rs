//! Transaction navigation mocks.

use serde_json::{Map, Value};

use super::{session_arg, str_arg};

pub(super) fn navigate(args: &Map<String, Value>) -> String {
    let tcode = str_arg(args, "transaction_code", "UNKNOWN");
    let session_id = session_arg(args);
    format!("Successfully navigated to transaction {tcode} in session {session_id}")
}

pub(super) fn navigate_back(args: &Map<String, Value>) -> String {
    let session_id = session_arg(args);
    format!("Navigated back (F3) in session {session_id}")
}

pub(super) fn navigate_exit(args: &Map<String, Value>) -> String {
    let session_id = session_arg(args);
    format!("Exited transaction (F15) in session {session_id}")
}
