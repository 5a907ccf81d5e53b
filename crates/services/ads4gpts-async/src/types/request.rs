//! Types for the ads request body

use serde::{Deserialize, Serialize};

use crate::error::AdsError;

/// Request body for `POST /api/v1/{banner,chat}_ads`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct AdRequest {
    /// Natural-language description of the user's situation
    pub context: String,

    /// How many ads to return (at least 1)
    #[serde(default = "default_num_ads")]
    pub num_ads: u32,
}

const fn default_num_ads() -> u32 {
    1
}

impl AdRequest {
    /// Create a request for a single ad
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            num_ads: default_num_ads(),
        }
    }

    /// Set the number of ads
    #[must_use]
    pub const fn with_num_ads(mut self, num_ads: u32) -> Self {
        self.num_ads = num_ads;
        self
    }

    /// Rejects an empty or whitespace-only context, and `num_ads == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AdsError::InvalidRequest`]; no network call is made for such requests.
    pub fn validate(&self) -> Result<(), AdsError> {
        if self.context.trim().is_empty() {
            return Err(AdsError::InvalidRequest("context must not be empty".into()));
        }
        if self.num_ads < 1 {
            return Err(AdsError::InvalidRequest(format!(
                "num_ads must be >= 1, got {}",
                self.num_ads
            )));
        }
        Ok(())
    }
}
