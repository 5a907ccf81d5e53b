//! Request and response types for the ADS4GPTs API

/// Banner and chat ad records
pub mod ads;
/// Response envelope and shaped results
pub mod envelope;
/// Ad request payload
pub mod request;

pub use ads::{AdRecord, AdSurface, BannerAd, ChatAd};
pub use envelope::{Ads, AdsData, AdsResponse, AdsStatus, OneOrMany};
pub use request::AdRequest;
