use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default ADS4GPTs API base URL
pub const ADS4GPTS_DEFAULT_BASE: &str = "https://with.ads4gpts.com";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "ADS4GPTS_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "ADS4GPTS_BASE_URL";

/// Configuration for the ADS4GPTs client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct Ads4GptsConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for Ads4GptsConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed(ENV_BASE_URL).unwrap_or_else(|| ADS4GPTS_DEFAULT_BASE.into()),
            api_key: env_trimmed(ENV_API_KEY).map(SecretString::from),
        }
    }
}

impl Ads4GptsConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `ADS4GPTS_API_KEY` for the bearer API key
    /// - `ADS4GPTS_BASE_URL` for a custom API base URL (defaults to `https://with.ads4gpts.com`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key, taking precedence over `ADS4GPTS_API_KEY`
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the API key only when `key` is `Some`, keeping the env fallback otherwise
    #[must_use]
    pub fn with_api_key_opt(self, key: Option<String>) -> Self {
        match key {
            Some(k) => self.with_api_key(k),
            None => self,
        }
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the ADS4GPTs client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::AdsError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::AdsError>;
}

impl Config for Ads4GptsConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::AdsError> {
        use crate::error::AdsError;

        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                    .map_err(|_| AdsError::Config("Invalid Authorization value".into()))?;
                value.set_sensitive(true);
                h.insert(AUTHORIZATION, value);
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn validate_auth(&self) -> Result<(), crate::error::AdsError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::AdsError::Config(format!(
                "Missing API key: pass it explicitly or set the {ENV_API_KEY} environment variable"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{AdsEnv, EnvGuard};
    use serial_test::serial;

    fn auth(cfg: &Ads4GptsConfig) -> String {
        cfg.headers().unwrap()[AUTHORIZATION]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _env = AdsEnv::with_key_and_base("test-key-123", "https://ads.internal.test");

        let cfg = Ads4GptsConfig::new();
        assert_eq!(cfg.api_base(), "https://ads.internal.test");
        assert_eq!(auth(&cfg), "Bearer test-key-123");
    }

    #[test]
    #[serial(env)]
    fn config_defaults_base_url() {
        let _env = AdsEnv::with_key("k");

        let cfg = Ads4GptsConfig::new();
        assert_eq!(cfg.api_base(), ADS4GPTS_DEFAULT_BASE);
    }

    #[test]
    #[serial(env)]
    fn explicit_key_wins_over_env() {
        let _env = AdsEnv::with_key("from-env");

        let cfg = Ads4GptsConfig::new().with_api_key_opt(Some("explicit".into()));
        assert_eq!(auth(&cfg), "Bearer explicit");

        let cfg = Ads4GptsConfig::new().with_api_key_opt(None);
        assert_eq!(auth(&cfg), "Bearer from-env");
    }

    #[test]
    #[serial(env)]
    fn validate_auth_missing_key() {
        let _env = AdsEnv::clean();

        let err = Ads4GptsConfig::new().validate_auth().unwrap_err();
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    #[serial(env)]
    fn whitespace_only_env_key_is_absent() {
        let _env = AdsEnv::with_key("   ");

        assert!(Ads4GptsConfig::new().validate_auth().is_err());
    }

    #[test]
    #[serial(env)]
    fn blank_env_base_url_falls_back_to_default() {
        let _env = AdsEnv::with_key("k");
        let _base = EnvGuard::set(ENV_BASE_URL, "  ");

        assert_eq!(Ads4GptsConfig::new().api_base(), ADS4GPTS_DEFAULT_BASE);
    }

    #[test]
    fn headers_carry_json_content_type() {
        let cfg = Ads4GptsConfig::new().with_api_key("k");
        let h = cfg.headers().unwrap();
        assert_eq!(h[CONTENT_TYPE], "application/json");
        assert!(h[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn url_joins_with_single_slash() {
        let cfg = Ads4GptsConfig::new().with_api_base("https://with.ads4gpts.com/");
        assert_eq!(
            cfg.url("/api/v1/banner_ads"),
            "https://with.ads4gpts.com/api/v1/banner_ads"
        );
        assert_eq!(
            cfg.url("api/v1/chat_ads"),
            "https://with.ads4gpts.com/api/v1/chat_ads"
        );
    }

    #[test]
    fn validate_auth_rejects_empty_or_whitespace() {
        assert!(Ads4GptsConfig::new().with_api_key("").validate_auth().is_err());
        assert!(Ads4GptsConfig::new().with_api_key(" \n").validate_auth().is_err());
        assert!(
            Ads4GptsConfig::new()
                .with_api_key("  valid-key  ")
                .validate_auth()
                .is_ok()
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = Ads4GptsConfig::new().with_api_key("super-secret-key-12345");
        let debug_str = format!("{cfg:?}");

        assert!(!debug_str.contains("super-secret-key-12345"));
        assert!(debug_str.contains("[REDACTED]"), "got: {debug_str}");
    }
}
