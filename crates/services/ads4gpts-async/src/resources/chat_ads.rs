use tokio_util::sync::CancellationToken;

use crate::{
    client::Client,
    config::Config,
    error::AdsError,
    types::{AdRequest, AdSurface, Ads, ChatAd},
};

/// API resource for the `/api/v1/chat_ads` endpoint
pub struct ChatAds<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> ChatAds<'c, C> {
    /// Creates a new `ChatAds` resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetch chat ads for `req`
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid, every attempt fails, or the
    /// response carries no ads.
    pub async fn get(&self, req: &AdRequest) -> Result<Ads<ChatAd>, AdsError> {
        self.get_with_cancel(req, &CancellationToken::new()).await
    }

    /// Like [`ChatAds::get`], abandoning the request when `cancel` fires
    ///
    /// # Errors
    ///
    /// As [`ChatAds::get`], plus [`AdsError::Cancelled`].
    pub async fn get_with_cancel(
        &self,
        req: &AdRequest,
        cancel: &CancellationToken,
    ) -> Result<Ads<ChatAd>, AdsError> {
        self.client.fetch(AdSurface::Chat, req, cancel).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the chat ads API resource
    #[must_use]
    pub const fn chat_ads(&self) -> ChatAds<'_, C> {
        ChatAds::new(self)
    }
}
