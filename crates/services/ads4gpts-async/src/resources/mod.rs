//! API resource implementations for the ADS4GPTs client

/// Banner ads resource
pub mod banner_ads;
/// Chat ads resource
pub mod chat_ads;

pub use banner_ads::BannerAds;
pub use chat_ads::ChatAds;
