//! Tool execution context.

use tokio_util::sync::CancellationToken;

/// Context passed to tool executions.
///
/// Carries the caller's cancellation signal down to the retry loop.
#[derive(Clone, Default, Debug)]
pub struct ToolContext {
    cancel: CancellationToken,
}

impl ToolContext {
    /// Create a context that is never cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context tied to `cancel`.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Token observed by in-flight tool calls.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}
