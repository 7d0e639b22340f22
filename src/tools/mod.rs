//! Mock SAP GUI automation tool registry.
//!
//! The protocol core never inspects tool internals: it sees an ordered
//! collection of descriptors (`descriptors`), an exact-name lookup
//! (`by_name`), and an execution call (`invoke`) returning plain text.
//! Every executor here is a canned-text mock; real SAP integration plugs in
//! behind the same interface.

pub mod batch;
pub mod catalog;
pub mod controls;
pub mod fields;
pub mod navigation;
pub mod screen;
pub mod session;
pub mod tables;
pub mod transfer;

use serde::Serialize;
use serde_json::{Map, Value};

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Executor signature: arguments in, result text out.
///
/// Executors default each argument individually and never fail — an absent
/// or wrong-typed argument falls back to its documented default.
pub type ToolFn = fn(&Map<String, Value>) -> String;

pub(crate) struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub run: ToolFn,
}

/// Lookup table built once at server startup, ordered as advertised.
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: catalog::tools(),
        }
    }

    /// All descriptors, in catalog order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor)
    }

    /// Exact-match lookup.
    pub fn by_name(&self, name: &str) -> Option<&ToolDescriptor> {
        self.find(name).map(|t| &t.descriptor)
    }

    /// Run a tool. `None` means the name is not registered; the caller
    /// decides how to report that (it is a domain outcome, not an error).
    pub fn invoke(&self, name: &str, arguments: &Map<String, Value>) -> Option<String> {
        self.find(name).map(|t| (t.run)(arguments))
    }

    /// A few valid identifiers, for "unknown tool" messages.
    pub fn example_names(&self, limit: usize) -> Vec<&'static str> {
        self.tools
            .iter()
            .take(limit)
            .map(|t| t.descriptor.name)
            .collect()
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.descriptor.name == name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Argument defaulting helpers shared by the executors
// ---------------------------------------------------------------------------

pub(crate) fn str_arg<'a>(args: &'a Map<String, Value>, key: &str, default: &'a str) -> &'a str {
    args.get(key).and_then(Value::as_str).unwrap_or(default)
}

pub(crate) fn int_arg(args: &Map<String, Value>, key: &str, default: i64) -> i64 {
    args.get(key).and_then(Value::as_i64).unwrap_or(default)
}

pub(crate) fn bool_arg(args: &Map<String, Value>, key: &str, default: bool) -> bool {
    args.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub(crate) fn session_arg<'a>(args: &'a Map<String, Value>) -> &'a str {
    str_arg(args, "session_id", "default")
}
