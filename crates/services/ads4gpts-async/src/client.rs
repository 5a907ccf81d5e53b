use std::sync::atomic::{AtomicU32, Ordering};

use backon::Retryable;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::{
    config::{Ads4GptsConfig, Config},
    error::AdsError,
    normalize::normalize,
    retry::RetryPolicy,
    types::{AdRecord, AdRequest, AdSurface, Ads, AdsResponse},
};

/// ADS4GPTs API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. Credentials are checked when the client is built, so a
/// constructed client never fails a call for a missing key.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
    policy: RetryPolicy,
}

impl Client<Ads4GptsConfig> {
    /// Creates a client from environment configuration
    ///
    /// Reads `ADS4GPTS_API_KEY` and, optionally, `ADS4GPTS_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`AdsError::Config`] when no API key is available.
    pub fn new() -> Result<Self, AdsError> {
        Self::with_config(Ads4GptsConfig::new())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdsError::Config`] when credentials are missing or the HTTP
    /// client cannot be built.
    pub fn with_config(config: C) -> Result<Self, AdsError> {
        config.validate_auth()?;
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AdsError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            config,
            policy: RetryPolicy::default(),
        })
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the retry policy
    ///
    /// # Errors
    ///
    /// Returns [`AdsError::Config`] if the policy is out of range.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Result<Self, AdsError> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Returns the active retry policy
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetches ads for `surface` and shapes them per `request.num_ads`.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_envelope`] and [`normalize`].
    pub async fn fetch<T>(
        &self,
        surface: AdSurface,
        request: &AdRequest,
        cancel: &CancellationToken,
    ) -> Result<Ads<T>, AdsError>
    where
        T: DeserializeOwned,
    {
        let envelope = self
            .fetch_envelope::<T>(surface.path(), request, cancel)
            .await?;
        normalize(envelope, request.num_ads)
    }

    /// POSTs `request` to `path` under the retry policy and decodes the envelope.
    ///
    /// The request is validated first; an invalid one never reaches the network.
    /// A body that is not valid JSON fails with [`AdsError::Serde`] and is not retried.
    ///
    /// # Errors
    ///
    /// - [`AdsError::InvalidRequest`] for an empty context or `num_ads == 0`
    /// - [`AdsError::FetchExhausted`] once the policy gives up
    /// - [`AdsError::Cancelled`] if `cancel` fires first
    pub async fn fetch_envelope<T>(
        &self,
        path: &str,
        request: &AdRequest,
        cancel: &CancellationToken,
    ) -> Result<AdsResponse<T>, AdsError>
    where
        T: DeserializeOwned,
    {
        request.validate()?;
        if cancel.is_cancelled() {
            return Err(AdsError::Cancelled);
        }

        let bytes = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(path, "ads request cancelled");
                return Err(AdsError::Cancelled);
            }
            res = self.execute_raw(path, request) => res?,
        };

        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }

    async fn execute_raw(&self, path: &str, request: &AdRequest) -> Result<bytes::Bytes, AdsError> {
        let url = self.config.url(path);
        let headers = self.config.headers()?;
        let max_attempts = self.policy.max_attempts;
        let attempts = AtomicU32::new(0);
        let http_client = &self.http;

        let result = (|| async {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(attempt, max_attempts, %url, "POST ads request");

            let response = http_client
                .post(&url)
                .headers(headers.clone())
                .json(request)
                .send()
                .await
                .map_err(AdsError::Transport)?;

            let status = response.status();
            let bytes = response.bytes().await.map_err(AdsError::Transport)?;

            if status.is_success() {
                return Ok(bytes);
            }

            Err(crate::error::http_status_error(status, &bytes))
        })
        .retry(self.policy.backoff_builder())
        .when(|e| self.policy.should_retry(e))
        .notify(|err, delay| {
            tracing::warn!(
                attempt = attempts.load(Ordering::SeqCst),
                max_attempts,
                delay_ms = delay.as_millis() as u64,
                "Fetch attempt {}/{max_attempts} failed: {err}",
                attempts.load(Ordering::SeqCst),
            );
        })
        .await;

        result.map_err(|err| {
            let attempts = attempts.load(Ordering::SeqCst);
            tracing::warn!(
                attempt = attempts,
                max_attempts,
                "Fetch attempt {attempts}/{max_attempts} failed: {err}"
            );
            AdsError::FetchExhausted {
                attempts,
                source: Box::new(err),
            }
        })
    }
}

/// Object-safe ads lookup shared by every tool adapter.
pub trait AdsClient: Send + Sync {
    /// Fetches normalized ads for `surface`.
    fn fetch_ads<'a>(
        &'a self,
        surface: AdSurface,
        request: AdRequest,
        cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Ads<AdRecord>, AdsError>>;
}

impl<C: Config> AdsClient for Client<C> {
    fn fetch_ads<'a>(
        &'a self,
        surface: AdSurface,
        request: AdRequest,
        cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Ads<AdRecord>, AdsError>> {
        Box::pin(async move {
            match surface {
                AdSurface::Banner => Ok(self
                    .banner_ads()
                    .get_with_cancel(&request, &cancel)
                    .await?
                    .map(AdRecord::from)),
                AdSurface::Chat => Ok(self
                    .chat_ads()
                    .get_with_cancel(&request, &cancel)
                    .await?
                    .map(AdRecord::from)),
            }
        })
    }
}
