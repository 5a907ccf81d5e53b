//! Unified error type for ad tools.

use ads4gpts_async::AdsError;
use thiserror::Error;

/// Error type returned by tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Invalid input provided to the tool.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal error during tool execution.
    #[error("internal error: {0}")]
    Internal(String),

    /// Error from the ads service.
    #[error("{0}")]
    External(String),

    /// The caller cancelled the call.
    #[error("cancelled: {0}")]
    Cancelled(String),
}

impl ToolError {
    /// Create an invalid input error.
    pub fn invalid_input<S: ToString>(s: S) -> Self {
        ToolError::InvalidInput(s.to_string())
    }

    /// Create an internal error.
    pub fn internal<S: ToString>(s: S) -> Self {
        ToolError::Internal(s.to_string())
    }

    /// Wrap a client failure, prefixing the tool name: `"<tool> failed: <cause>"`.
    pub fn execution(tool: &str, err: &AdsError) -> Self {
        let msg = format!("{tool} failed: {err}");
        match err {
            AdsError::InvalidRequest(_) => ToolError::InvalidInput(msg),
            AdsError::Cancelled => ToolError::Cancelled(msg),
            _ => ToolError::External(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_prefixes_tool_name() {
        let err = ToolError::execution(
            "ads4gpts_chat_tool",
            &AdsError::InvalidResponse("no 'ads' field found".into()),
        );
        assert_eq!(
            err.to_string(),
            "ads4gpts_chat_tool failed: Invalid response: no 'ads' field found"
        );
    }

    #[test]
    fn execution_keeps_error_kind() {
        let bad = ToolError::execution("t", &AdsError::InvalidRequest("num_ads".into()));
        assert!(matches!(bad, ToolError::InvalidInput(_)));
        assert!(matches!(
            ToolError::execution("t", &AdsError::Cancelled),
            ToolError::Cancelled(_)
        ));
    }
}
