use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when using the ADS4GPTs client
#[derive(Debug, Error)]
pub enum AdsError {
    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Request rejected before any network call
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure on a single attempt
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status on a single attempt
    #[error("HTTP error: {status} {reason}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
        /// Leading bytes of the response body
        body: String,
    },

    /// Every attempt failed; carries the last underlying error
    #[error("Failed to fetch after {attempts} attempts: {source}")]
    FetchExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        source: Box<AdsError>,
    },

    /// The response decoded but carried no usable ads
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// The caller cancelled the request
    #[error("request cancelled")]
    Cancelled,
}

impl AdsError {
    /// Whether a hardened retry policy should try this failure again.
    ///
    /// Only timeouts, connect failures and 408/409/429/5xx qualify.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => crate::retry::is_retryable_status(*status),
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_body(),
            Self::Config(_)
            | Self::InvalidRequest(_)
            | Self::FetchExhausted { .. }
            | Self::InvalidResponse(_)
            | Self::Serde(_)
            | Self::Cancelled => false,
        }
    }

    /// HTTP status of the failure, looking through `FetchExhausted`.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::FetchExhausted { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// Maps a serde deserialization error to an `AdsError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> AdsError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    AdsError::Serde(format!("{e}: {snippet}"))
}

/// Builds the per-attempt error for a non-success status.
#[must_use]
pub fn http_status_error(status: StatusCode, body: &[u8]) -> AdsError {
    AdsError::HttpStatus {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        // Cap body to avoid log/memory bloat
        body: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
    }
}
