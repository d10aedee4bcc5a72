//! The browser capability the collectors drive.
//!
//! Collectors only ever talk to these traits, so the same extraction code runs
//! against a live WebDriver session ([`crate::WebDriverBrowser`]) or an
//! in-memory page in tests.

use std::time::Duration;

use serde_json::Value;

use crate::error::BrowserError;

/// A controllable browser tab.
///
/// Lookups take CSS selectors. `find` returns `Ok(None)` when nothing
/// matches; `Err` is reserved for the command itself failing.
#[allow(async_fn_in_trait)]
pub trait Browser {
    type Element: PageElement;

    async fn goto(&self, url: &str) -> Result<(), BrowserError>;

    /// Waits until `selector` matches, polling up to `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Timeout`] if nothing matched in time.
    async fn wait_for(&self, selector: &str, timeout: Duration)
        -> Result<Self::Element, BrowserError>;

    async fn find(&self, selector: &str) -> Result<Option<Self::Element>, BrowserError>;

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, BrowserError>;

    /// Runs `script` with `element` bound to `arguments[0]`.
    async fn execute_on(&self, script: &str, element: &Self::Element)
        -> Result<Value, BrowserError>;

    /// Ends the session.
    async fn quit(self) -> Result<(), BrowserError>
    where
        Self: Sized;
}

/// An element handle inside a [`Browser`] page.
#[allow(async_fn_in_trait)]
pub trait PageElement: Sized {
    /// Rendered text content.
    async fn text(&self) -> Result<String, BrowserError>;

    async fn attr(&self, name: &str) -> Result<Option<String>, BrowserError>;

    /// First descendant matching `selector`.
    async fn find(&self, selector: &str) -> Result<Option<Self>, BrowserError>;
}
