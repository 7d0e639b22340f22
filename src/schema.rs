use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Arguments do not satisfy the tool's input schema")]
    ValidationFailed,
}

/// Compile a tool `inputSchema` document (draft 2020-12), proving it is a
/// usable JSON Schema.
pub fn compile_tool_schema(schema: &Value) -> Result<Validator, SchemaValidationError> {
    validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))
}

/// Validate call arguments against a tool's input schema.
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_arguments(schema: &Value, arguments: &Value) -> Result<(), SchemaValidationError> {
    let validator = compile_tool_schema(schema)?;

    if validator.is_valid(arguments) {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed)
    }
}
