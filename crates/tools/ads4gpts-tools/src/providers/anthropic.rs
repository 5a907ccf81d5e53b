//! Anthropic tool definition renderer.

use schemars::Schema;
use serde_json::{Value, json};

/// Render a tool as an Anthropic tool definition.
///
/// Output format:
/// ```json
/// {
///   "name": "...",
///   "description": "...",
///   "input_schema": { ... }
/// }
/// ```
pub fn render_tool(name: &str, description: &str, input_schema: &Schema) -> Value {
    json!({
        "name": name,
        "description": description,
        "input_schema": input_schema.as_value()
    })
}
