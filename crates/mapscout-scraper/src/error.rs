use thiserror::Error;

/// Failures reported by a [`crate::Browser`] implementation.
///
/// A selector that matches nothing is not an error; lookups return `None`.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("timed out waiting for {selector}")]
    Timeout { selector: String },

    #[error("stale element reference: {0}")]
    StaleElement(String),

    #[error("browser session is gone: {0}")]
    SessionLost(String),

    #[error("script returned unexpected value: {0}")]
    UnexpectedScriptResult(String),

    #[error("webdriver command failed: {0}")]
    Command(String),
}

impl BrowserError {
    /// `true` when the element or session the caller was working with can no
    /// longer be used, as opposed to a single lookup going wrong.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        matches!(self, Self::StaleElement(_) | Self::SessionLost(_))
    }
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to start browser session at {webdriver_url}: {reason}")]
    Session {
        webdriver_url: String,
        reason: String,
    },

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("results feed did not appear within {timeout_secs}s")]
    FeedMissing { timeout_secs: u64 },
}
