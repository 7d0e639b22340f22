//! Multi-step transaction execution and wait mocks.

use serde_json::{Map, Value};

use super::{int_arg, session_arg, str_arg};

pub(super) fn execute_transaction(args: &Map<String, Value>) -> String {
    let tcode = str_arg(args, "transaction_code", "VA01");
    let steps = args
        .get("steps")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let executed: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let empty = Map::new();
            let step = step.as_object().unwrap_or(&empty);
            let action = str_arg(step, "action", "unknown");
            let target = str_arg(step, "target", "unknown");
            let value = str_arg(step, "value", "");
            format!("Step {}: {action} on {target} with '{value}'", i + 1)
        })
        .collect();

    format!(
        "Executed transaction {tcode} with {} steps: {}",
        steps.len(),
        executed.join("; ")
    )
}

pub(super) fn wait_for_screen(args: &Map<String, Value>) -> String {
    let screen_id = str_arg(args, "screen_id", "SCREEN");
    let timeout = int_arg(args, "timeout", 30);
    let session_id = session_arg(args);
    format!(
        "Successfully waited for screen '{screen_id}' (timeout: {timeout}s) in session {session_id}"
    )
}
