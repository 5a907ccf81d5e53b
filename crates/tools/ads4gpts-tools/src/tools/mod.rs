//! The banner and chat ad tools.

mod banner;
mod chat;

pub use banner::BannerAdsTool;
pub use chat::ChatAdsTool;

use std::sync::Arc;

use ads4gpts_async::AdsClient;
use ads4gpts_async::types::{AdRecord, AdRequest, AdSurface, Ads};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::ToolError;

/// Arguments accepted by both ad tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AdToolInput {
    /// Context that will help retrieve the most relevant ads. The richer the context, the better the ad fit.
    #[schemars(length(min = 1))]
    pub context: String,

    /// Number of ads to retrieve (must be >= 1).
    #[serde(default = "default_num_ads")]
    #[schemars(range(min = 1))]
    pub num_ads: u32,
}

const fn default_num_ads() -> u32 {
    1
}

impl AdToolInput {
    /// Arguments for `num_ads` ads about `context`.
    pub fn new(context: impl Into<String>, num_ads: u32) -> Self {
        Self {
            context: context.into(),
            num_ads,
        }
    }
}

impl From<AdToolInput> for AdRequest {
    fn from(input: AdToolInput) -> Self {
        AdRequest::new(input.context).with_num_ads(input.num_ads)
    }
}

/// Shared body of both tools: fetch, log and prefix failures with the tool name.
async fn fetch_ads(
    client: Arc<dyn AdsClient>,
    surface: AdSurface,
    tool: &'static str,
    input: AdToolInput,
    cancel: CancellationToken,
) -> Result<Ads<AdRecord>, ToolError> {
    let request = AdRequest::from(input);
    match client.fetch_ads(surface, request, cancel).await {
        Ok(ads) => {
            tracing::debug!(tool, %surface, count = ads.len(), "ads retrieved");
            Ok(ads)
        }
        Err(err) => {
            tracing::error!(tool, %surface, "Error retrieving {surface} ads: {err}");
            Err(ToolError::execution(tool, &err))
        }
    }
}
