use apidocs_core::GeneratorError;
use serde_json::Value;

/// Emit `api-docs.json` — the fetched document, pretty-printed with two-space indentation.
pub fn emit_spec_json(spec: &Value) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string_pretty(spec)?)
}
