//! MCP tool definition renderer.

use schemars::Schema;
use serde_json::{Value, json};

/// Render a tool as an MCP tool definition.
///
/// Output format:
/// ```json
/// {
///   "name": "...",
///   "description": "...",
///   "inputSchema": { ... }
/// }
/// ```
///
/// No `outputSchema` is emitted: MCP requires it to be object-typed, and the ad
/// tools answer with either an object or an array.
pub fn render_tool(name: &str, description: &str, input_schema: &Schema) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": input_schema.as_value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::input_schema_for;
    use crate::tools::AdToolInput;

    #[test]
    fn renders_input_schema_only() {
        let input = input_schema_for::<AdToolInput>();
        let rendered = render_tool("ads4gpts_chat_tool", "Chat ads", &input);

        assert_eq!(rendered["name"], "ads4gpts_chat_tool");
        assert_eq!(rendered["description"], "Chat ads");
        assert_eq!(rendered["inputSchema"]["required"], json!(["context"]));
        assert!(rendered.get("outputSchema").is_none());
    }
}
