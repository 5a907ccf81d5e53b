//! OpenAI function calling definition renderer.

use schemars::Schema;
use serde_json::{Value, json};

/// Render a tool as an OpenAI chat-completions function tool.
///
/// Output format:
/// ```json
/// {
///   "type": "function",
///   "function": {
///     "name": "...",
///     "description": "...",
///     "strict": false,
///     "parameters": { ... }
///   }
/// }
/// ```
///
/// With `strict`, the parameters are rewritten by [`crate::schema::strict`].
pub fn render_function(name: &str, description: &str, parameters: &Schema, strict: bool) -> Value {
    let params = if strict {
        crate::schema::strict(parameters)
    } else {
        parameters.as_value().clone()
    };
    json!({
        "type": "function",
        "function": {
            "name": name,
            "description": description,
            "strict": strict,
            "parameters": params
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::input_schema_for;
    use crate::tools::AdToolInput;

    #[test]
    fn renders_function_envelope() {
        let schema = input_schema_for::<AdToolInput>();
        let rendered = render_function("ads4gpts_chat_tool", "Chat ads", &schema, false);

        assert_eq!(rendered["type"], "function");
        assert_eq!(rendered["function"]["name"], "ads4gpts_chat_tool");
        assert_eq!(rendered["function"]["strict"], false);
        assert_eq!(rendered["function"]["parameters"]["required"], json!(["context"]));
    }

    #[test]
    fn strict_marks_num_ads_required() {
        let schema = input_schema_for::<AdToolInput>();
        let rendered = render_function("t", "d", &schema, true);
        let params = &rendered["function"]["parameters"];

        assert_eq!(params["additionalProperties"], false);
        assert_eq!(params["required"].as_array().unwrap().len(), 2);
    }
}
