use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    config::Config,
    error::AdsError,
    types::{AdRequest, AdSurface, Ads, BannerAd},
};

/// API resource for the `/api/v1/banner_ads` endpoint
pub struct BannerAds<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> BannerAds<'c, C> {
    /// Creates a new `BannerAds` resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetch banner ads for `req`
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid, every attempt fails, or the
    /// response carries no ads.
    pub async fn get(&self, req: &AdRequest) -> Result<Ads<BannerAd>, AdsError> {
        self.get_with_cancel(req, &CancellationToken::new()).await
    }

    /// Like [`BannerAds::get`], abandoning the request when `cancel` fires
    ///
    /// # Errors
    ///
    /// As [`BannerAds::get`], plus [`AdsError::Cancelled`].
    pub async fn get_with_cancel(
        &self,
        req: &AdRequest,
        cancel: &CancellationToken,
    ) -> Result<Ads<BannerAd>, AdsError> {
        self.client.fetch(AdSurface::Banner, req, cancel).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the banner ads API resource
    #[must_use]
    pub const fn banner_ads(&self) -> BannerAds<'_, C> {
        BannerAds::new(self)
    }
}
