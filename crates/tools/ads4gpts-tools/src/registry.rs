//! Tool registry for JSON dispatch.

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::schema::input_schema_for;
use crate::tool::Tool;
use futures::future::BoxFuture;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Type-erased tool for dynamic dispatch.
pub trait ErasedTool: Send + Sync {
    /// Get the tool's name.
    fn name(&self) -> &'static str;

    /// Get the tool's description.
    fn description(&self) -> &'static str;

    /// Get the input JSON schema.
    fn input_schema(&self) -> Schema;

    /// Call the tool with JSON arguments.
    fn call_json(
        &self,
        args: Value,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Value, ToolError>>;
}

/// Registry of tools keyed by name; iteration is in name order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    map: BTreeMap<String, Arc<dyn ErasedTool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.list_names())
            .finish()
    }
}

impl ToolRegistry {
    /// Create a new registry builder.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// List all tool names in the registry.
    pub fn list_names(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ErasedTool>> {
        self.map.get(name)
    }

    /// Iterate over registered tools in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ErasedTool>> {
        self.map.values()
    }

    /// Dispatch a tool call using JSON arguments.
    pub async fn dispatch_json(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolContext,
    ) -> Result<Value, ToolError> {
        let entry = self
            .map
            .get(name)
            .ok_or_else(|| ToolError::invalid_input(format!("Unknown tool: {name}")))?;
        entry.call_json(args, ctx).await
    }

    /// Check if a tool is registered by name.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builder for constructing a [`ToolRegistry`].
#[derive(Default)]
pub struct ToolRegistryBuilder {
    items: Vec<Arc<dyn ErasedTool>>,
}

impl ToolRegistryBuilder {
    /// Register a tool whose input is JSON-decodable and output JSON-encodable.
    ///
    /// A later tool with the same name replaces an earlier one.
    pub fn register<T>(mut self, tool: T) -> Self
    where
        T: Tool + Clone,
        T::Input: DeserializeOwned + JsonSchema,
        T::Output: Serialize,
    {
        struct Impl<T: Tool> {
            tool: T,
        }

        impl<T> ErasedTool for Impl<T>
        where
            T: Tool + Clone,
            T::Input: DeserializeOwned + JsonSchema,
            T::Output: Serialize,
        {
            fn name(&self) -> &'static str {
                T::NAME
            }

            fn description(&self) -> &'static str {
                T::DESCRIPTION
            }

            fn input_schema(&self) -> Schema {
                input_schema_for::<T::Input>()
            }

            fn call_json(
                &self,
                args: Value,
                ctx: &ToolContext,
            ) -> BoxFuture<'static, Result<Value, ToolError>> {
                let input: T::Input = match serde_json::from_value(args) {
                    Ok(input) => input,
                    Err(e) => {
                        let err = ToolError::invalid_input(format!("{} failed: {e}", T::NAME));
                        return Box::pin(async move { Err(err) });
                    }
                };
                let fut = self.tool.call(input, ctx);
                Box::pin(async move {
                    let out = fut.await?;
                    serde_json::to_value(out).map_err(|e| ToolError::internal(e.to_string()))
                })
            }
        }

        self.items.push(Arc::new(Impl { tool }));
        self
    }

    /// Build the registry from registered tools.
    pub fn finish(self) -> ToolRegistry {
        let map = self
            .items
            .into_iter()
            .map(|erased| (erased.name().to_string(), erased))
            .collect();
        ToolRegistry { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone)]
    struct ShoutTool;

    #[derive(Deserialize, JsonSchema)]
    struct ShoutInput {
        text: String,
    }

    impl Tool for ShoutTool {
        type Input = ShoutInput;
        type Output = String;
        const NAME: &'static str = "shout";
        const DESCRIPTION: &'static str = "Upper-cases text";

        fn call(
            &self,
            input: Self::Input,
            _ctx: &ToolContext,
        ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
            Box::pin(async move { Ok(input.text.to_uppercase()) })
        }
    }

    #[test]
    fn builder_registers_by_name() {
        let registry = ToolRegistry::builder().register(ShoutTool).finish();

        assert!(registry.contains("shout"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list_names(), vec!["shout".to_string()]);
        let schema = registry.get("shout").unwrap().input_schema();
        assert_eq!(schema.as_value()["properties"]["text"]["type"], "string");
    }

    #[tokio::test]
    async fn dispatch_json_round_trip() {
        let registry = ToolRegistry::builder().register(ShoutTool).finish();
        let out = registry
            .dispatch_json("shout", serde_json::json!({"text": "hi"}), &ToolContext::new())
            .await
            .unwrap();
        assert_eq!(out, serde_json::json!("HI"));
    }

    #[tokio::test]
    async fn unknown_tool_and_bad_args() {
        let registry = ToolRegistry::builder().register(ShoutTool).finish();
        let ctx = ToolContext::new();

        let err = registry
            .dispatch_json("missing", serde_json::json!({}), &ctx)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown tool: missing"));

        let err = registry
            .dispatch_json("shout", serde_json::json!({"nope": 1}), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(ref m) if m.starts_with("shout failed")));
    }
}
