#![deny(missing_docs)]

//! Async ADS4GPTs client: retrying fetches against the ads API and
//! normalization of its single-or-array `ads` payload.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// Response-shape normalization
pub mod normalize;
/// API resource implementations
pub mod resources;
/// Retry policy and failure classification
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::{AdsClient, Client};
pub use crate::config::Ads4GptsConfig;
pub use crate::error::AdsError;
pub use crate::retry::{RetryOn, RetryPolicy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Ads4GptsConfig, AdsClient, Client, RetryPolicy};
}
