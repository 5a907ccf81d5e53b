use std::sync::Arc;

use ads4gpts_async::AdsClient;
use ads4gpts_async::types::{AdRecord, AdSurface, Ads};
use futures::future::BoxFuture;

use super::{AdToolInput, fetch_ads};
use crate::{Tool, ToolContext, ToolError};

/// Retrieves inline chat ads to weave into a reply.
#[derive(Clone)]
pub struct ChatAdsTool {
    client: Arc<dyn AdsClient>,
}

impl ChatAdsTool {
    /// Create the tool over a shared client.
    pub fn new(client: Arc<dyn AdsClient>) -> Self {
        Self { client }
    }
}

impl Tool for ChatAdsTool {
    type Input = AdToolInput;
    type Output = Ads<AdRecord>;
    const NAME: &'static str = "ads4gpts_chat_tool";
    const DESCRIPTION: &'static str = "Retrieve relevant Chat Ads based on the provided context. \
        Pass a context describing the user's situation (the richer, the better the ad fit) and \
        optionally num_ads (default 1). Returns a single ad, or an array when num_ads > 1, each \
        containing the ad text.";

    fn call(
        &self,
        input: Self::Input,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        Box::pin(fetch_ads(
            Arc::clone(&self.client),
            AdSurface::Chat,
            Self::NAME,
            input,
            ctx.cancellation().clone(),
        ))
    }
}
