//! Button, menu, and keyboard mocks.

use serde_json::{Map, Value};

use super::{session_arg, str_arg};

pub(super) fn press_button(args: &Map<String, Value>) -> String {
    let button_id = str_arg(args, "button_id", "BUTTON");
    let session_id = session_arg(args);
    format!("Successfully pressed button '{button_id}' in session {session_id}")
}

pub(super) fn select_menu(args: &Map<String, Value>) -> String {
    let menu_path = str_arg(args, "menu_path", "Menu->Item");
    let session_id = session_arg(args);
    format!("Successfully selected menu '{menu_path}' in session {session_id}")
}

pub(super) fn send_key(args: &Map<String, Value>) -> String {
    let key = str_arg(args, "key", "Enter");
    let session_id = session_arg(args);
    format!("Successfully sent key '{key}' in session {session_id}")
}
