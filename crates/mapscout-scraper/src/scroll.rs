//! Scroll-to-exhaustion for lazily loaded result feeds.
//!
//! The results feed only renders more cards once it is scrolled near the
//! bottom. Scrolling repeatedly until the container's `scrollHeight` stops
//! growing turns it into a fully materialized list that can be enumerated.

use std::time::Duration;

use serde_json::Value;

use crate::browser::Browser;
use crate::error::BrowserError;

const SCROLL_HEIGHT_JS: &str = "return arguments[0].scrollHeight;";
const SCROLL_TO_END_JS: &str = "arguments[0].scrollTo(0, arguments[0].scrollHeight);";

/// When to consider a feed fully loaded.
///
/// A single unchanged reading is not enough: a slow network response can
/// leave the height flat for one pause and then grow again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollPolicy {
    /// Wait between scrolling and re-measuring.
    pub pause: Duration,
    /// Consecutive unchanged readings that mark the end of the feed.
    pub stable_reads: u32,
    /// Hard cap on scroll iterations for feeds that never settle.
    pub max_scrolls: u32,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            pause: Duration::from_secs(2),
            stable_reads: 3,
            max_scrolls: 50,
        }
    }
}

/// How a scroll run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// Scroll iterations performed.
    pub scrolls: u32,
    /// Last measured `scrollHeight`.
    pub height: u64,
    /// `true` if the height settled, `false` if the cap was hit first.
    pub settled: bool,
}

/// Scrolls `feed` to its bottom until its height is unchanged for
/// `policy.stable_reads` consecutive iterations, or `policy.max_scrolls`
/// iterations have run.
///
/// Each iteration scrolls to the current maximum extent, sleeps
/// `policy.pause`, then re-measures. Any height change resets the stable
/// counter. Reaching the cap is not an error; the outcome reports
/// `settled: false`.
///
/// # Errors
///
/// Propagates [`BrowserError`] from script execution, and returns
/// [`BrowserError::UnexpectedScriptResult`] if the height is not a number.
pub async fn scroll_to_exhaustion<B: Browser>(
    browser: &B,
    feed: &B::Element,
    policy: &ScrollPolicy,
) -> Result<ScrollOutcome, BrowserError> {
    let mut last_height = scroll_height(browser, feed).await?;
    let mut stable = 0u32;

    for scroll in 1..=policy.max_scrolls {
        browser.execute_on(SCROLL_TO_END_JS, feed).await?;
        if !policy.pause.is_zero() {
            tokio::time::sleep(policy.pause).await;
        }

        let height = scroll_height(browser, feed).await?;
        if height == last_height {
            stable += 1;
            if stable >= policy.stable_reads {
                tracing::info!(scrolls = scroll, height, "reached end of results");
                return Ok(ScrollOutcome {
                    scrolls: scroll,
                    height,
                    settled: true,
                });
            }
        } else {
            tracing::debug!(scroll, from = last_height, to = height, "feed grew");
            stable = 0;
            last_height = height;
        }
    }

    tracing::warn!(
        max_scrolls = policy.max_scrolls,
        height = last_height,
        "feed never settled; stopping at scroll cap"
    );
    Ok(ScrollOutcome {
        scrolls: policy.max_scrolls,
        height: last_height,
        settled: false,
    })
}

async fn scroll_height<B: Browser>(browser: &B, feed: &B::Element) -> Result<u64, BrowserError> {
    let value = browser.execute_on(SCROLL_HEIGHT_JS, feed).await?;
    height_from_value(&value)
}

/// Drivers report `scrollHeight` as an integer, but some serialize it as a
/// float.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn height_from_value(value: &Value) -> Result<u64, BrowserError> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|h| h.is_finite() && *h >= 0.0)
                .map(|h| h.round() as u64)
        })
        .ok_or_else(|| BrowserError::UnexpectedScriptResult(value.to_string()))
}
