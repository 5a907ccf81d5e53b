//! Core tool trait.

use crate::context::ToolContext;
use crate::error::ToolError;
use futures::future::BoxFuture;

/// A tool callable with native Rust types.
///
/// JSON decoding and schema generation happen in [`crate::ToolRegistry`], so a
/// tool can also be invoked directly without any serialization.
///
/// # Example
///
/// ```ignore
/// use ads4gpts_tools::{Tool, ToolContext, ToolError};
/// use futures::future::BoxFuture;
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     type Input = String;
///     type Output = String;
///     const NAME: &'static str = "echo";
///     const DESCRIPTION: &'static str = "Echo the input";
///
///     fn call(&self, input: Self::Input, _ctx: &ToolContext)
///         -> BoxFuture<'static, Result<Self::Output, ToolError>>
///     {
///         Box::pin(async move { Ok(input) })
///     }
/// }
/// ```
pub trait Tool: Send + Sync + 'static {
    /// Input type for the tool.
    type Input: Send + 'static;

    /// Output type for the tool.
    type Output: Send + 'static;

    /// Unique name identifying the tool.
    const NAME: &'static str;

    /// Human-readable description shown to the model.
    const DESCRIPTION: &'static str;

    /// Execute the tool with the given input and context.
    fn call(
        &self,
        input: Self::Input,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>>;
}
