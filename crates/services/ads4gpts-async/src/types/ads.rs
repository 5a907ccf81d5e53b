//! Ad records returned by the banner and chat endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display surface an ad is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdSurface {
    /// Image creative with title, body and call-to-action
    Banner,
    /// Inline conversational text
    Chat,
}

impl AdSurface {
    /// API path for this surface
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Banner => "/api/v1/banner_ads",
            Self::Chat => "/api/v1/chat_ads",
        }
    }
}

impl std::fmt::Display for AdSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Banner => "banner",
            Self::Chat => "chat",
        })
    }
}

/// A banner ad
///
/// Older API versions prefix every field with `ad_`; both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BannerAd {
    /// Image URL of the creative
    #[serde(default, alias = "ad_creative")]
    pub creative: String,
    /// Headline
    #[serde(default, alias = "ad_title")]
    pub title: String,
    /// Ad copy
    #[serde(default, alias = "ad_body")]
    pub body: String,
    /// Click-through URL
    #[serde(default, alias = "ad_link")]
    pub link: String,
    /// Call-to-action label for the link
    #[serde(default, alias = "ad_link_cta")]
    pub link_cta: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An inline chat ad
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ChatAd {
    /// Ad text to weave into the reply
    #[serde(default, alias = "ad_text")]
    pub text: String,
    /// Optional click-through URL
    #[serde(default, alias = "ad_link", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ad of either surface, as returned through [`crate::AdsClient`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum AdRecord {
    /// Banner ad
    Banner(BannerAd),
    /// Chat ad
    Chat(ChatAd),
}

impl From<BannerAd> for AdRecord {
    fn from(ad: BannerAd) -> Self {
        Self::Banner(ad)
    }
}

impl From<ChatAd> for AdRecord {
    fn from(ad: ChatAd) -> Self {
        Self::Chat(ad)
    }
}
