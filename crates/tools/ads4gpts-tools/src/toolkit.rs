//! Both ad tools bundled behind one client.

use std::sync::Arc;

use ads4gpts_async::types::{AdRecord, AdRequest, AdSurface, Ads};
use ads4gpts_async::{Ads4GptsConfig, AdsClient, AdsError, Client, RetryPolicy};
use futures::future::BoxFuture;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::providers::{anthropic, mcp, openai};
use crate::{BannerAdsTool, ChatAdsTool, ToolContext, ToolError, ToolRegistry};

/// The banner and chat tools sharing one [`AdsClient`].
///
/// Exposes the tools as a [`ToolRegistry`] for JSON dispatch and renders their
/// definitions for OpenAI, Anthropic and MCP tool-calling.
#[derive(Clone, Debug)]
pub struct Ads4GptsToolkit {
    registry: ToolRegistry,
}

impl Ads4GptsToolkit {
    /// Build the toolkit over an existing client.
    pub fn new(client: Arc<dyn AdsClient>) -> Self {
        let registry = ToolRegistry::builder()
            .register(BannerAdsTool::new(Arc::clone(&client)))
            .register(ChatAdsTool::new(client))
            .finish();
        Self { registry }
    }

    /// Build the toolkit from configuration, failing fast on a missing API key.
    pub fn from_config(config: Ads4GptsConfig, policy: RetryPolicy) -> Result<Self, AdsError> {
        let client = Client::with_config(config)?.with_retry_policy(policy)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Build the toolkit without credentials, for rendering tool definitions.
    ///
    /// Executing a tool on this toolkit fails with a configuration error.
    pub fn definitions_only() -> Self {
        Self::new(Arc::new(Unconfigured))
    }

    /// Registered tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Names of the registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.registry.list_names()
    }

    /// OpenAI chat-completions `tools` array.
    pub fn openai_tools(&self, strict: bool) -> Vec<Value> {
        self.registry
            .iter()
            .map(|t| openai::render_function(t.name(), t.description(), &t.input_schema(), strict))
            .collect()
    }

    /// Anthropic messages `tools` array.
    pub fn anthropic_tools(&self) -> Vec<Value> {
        self.registry
            .iter()
            .map(|t| anthropic::render_tool(t.name(), t.description(), &t.input_schema()))
            .collect()
    }

    /// MCP `tools/list` entries.
    pub fn mcp_tools(&self) -> Vec<Value> {
        self.registry
            .iter()
            .map(|t| mcp::render_tool(t.name(), t.description(), &t.input_schema()))
            .collect()
    }

    /// Run the named tool with JSON arguments, as a model's tool call would.
    pub async fn execute_tool(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolContext,
    ) -> Result<Value, ToolError> {
        if !self.registry.contains(name) {
            return Err(ToolError::invalid_input(format!(
                "Invalid tool type: {name}; expected one of {}",
                self.tool_names().join(", ")
            )));
        }
        self.registry.dispatch_json(name, args, ctx).await
    }
}

/// Client behind [`Ads4GptsToolkit::definitions_only`].
struct Unconfigured;

impl AdsClient for Unconfigured {
    fn fetch_ads<'a>(
        &'a self,
        _surface: AdSurface,
        _request: AdRequest,
        _cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Ads<AdRecord>, AdsError>> {
        Box::pin(async {
            Err(AdsError::Config(
                "toolkit was built for tool definitions only; no API client is configured".into(),
            ))
        })
    }
}
