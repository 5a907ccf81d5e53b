//! Response envelope and the shaped result handed back to callers

use serde::{Deserialize, Serialize};

/// Top-level `status` of an API response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdsStatus {
    /// Request served
    Success,
    /// Request failed server-side
    Error,
    /// Any status this client does not know
    #[serde(other)]
    Unknown,
}

/// Wire envelope returned by both ads endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsResponse<T> {
    /// Outcome reported by the server
    pub status: Option<AdsStatus>,
    /// Payload, present on success
    pub data: Option<AdsData<T>>,
    /// Human-readable message, usually on error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `data` object of the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsData<T> {
    /// A single ad or a list of ads
    pub ads: Option<OneOrMany<T>>,
}

/// The server answers with either one object or an array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// JSON array
    Many(Vec<T>),
    /// Bare JSON object
    One(T),
}

/// Normalized result: one ad, or a list of ads
///
/// Serializes untagged, so tool callers see either an object or an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Ads<T> {
    /// Exactly one ad
    One(T),
    /// Several ads, in server order
    Many(Vec<T>),
}

impl<T> Ads<T> {
    /// Number of ads carried
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// True for an empty `Many`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts each ad, keeping the shape
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Ads<U> {
        match self {
            Self::One(ad) => Ads::One(f(ad)),
            Self::Many(v) => Ads::Many(v.into_iter().map(f).collect()),
        }
    }

    /// Flattens into a vector regardless of shape
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(ad) => vec![ad],
            Self::Many(v) => v,
        }
    }
}
