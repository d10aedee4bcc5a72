//! Search-results list collection.
//!
//! Opens the results view for a query, scrolls the feed until every card has
//! rendered, and reads a [`SummaryRecord`] off each card. Failures degrade
//! rather than propagate: a missing field is absent, a broken card is
//! dropped, and a search that cannot be loaded yields no records.

use mapscout_core::{resolve_locale, SummaryRecord};

use crate::browser::{Browser, PageElement};
use crate::error::{BrowserError, ScraperError};
use crate::parse::{clean_text, strip_parens};
use crate::scroll::scroll_to_exhaustion;
use crate::search::search_url;
use crate::selectors::feed;
use crate::settings::ScrapeSettings;

/// Collects summary records for every result of `query`.
///
/// Returns an empty `Vec` when the results feed never appears or the session
/// fails mid-run; callers treat that as "nothing found".
pub async fn collect_listings<B: Browser>(
    browser: &B,
    query: &str,
    settings: &ScrapeSettings,
) -> Vec<SummaryRecord> {
    match try_collect_listings(browser, query, settings).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(query, error = %e, "list scrape failed");
            Vec::new()
        }
    }
}

async fn try_collect_listings<B: Browser>(
    browser: &B,
    query: &str,
    settings: &ScrapeSettings,
) -> Result<Vec<SummaryRecord>, ScraperError> {
    let locale = resolve_locale(query);
    let url = search_url(query, locale);
    tracing::info!(query, locale, url = %url, "opening search results");

    browser.goto(&url).await?;

    let container = match browser
        .wait_for(feed::CONTAINER, settings.feed_timeout)
        .await
    {
        Ok(container) => container,
        Err(BrowserError::Timeout { .. }) => {
            return Err(ScraperError::FeedMissing {
                timeout_secs: settings.feed_timeout.as_secs(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("scrolling to load all results");
    let outcome = scroll_to_exhaustion(browser, &container, &settings.scroll).await?;
    tracing::info!(
        scrolls = outcome.scrolls,
        settled = outcome.settled,
        "finished scrolling"
    );

    if !settings.list_settle.is_zero() {
        tokio::time::sleep(settings.list_settle).await;
    }

    let items = browser.find_all(feed::ITEM).await?;
    let total = items.len();
    tracing::info!(total, "found results");

    let mut records = Vec::with_capacity(total);
    for (idx, item) in items.iter().enumerate() {
        let position = idx + 1;
        tracing::debug!(position, total, "reading result card");
        match extract_summary(item).await {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping result card");
            }
        }
    }

    Ok(records)
}

/// Reads the four summary fields from one result card.
///
/// Each field is looked up on its own; one missing sub-element never affects
/// the others.
///
/// # Errors
///
/// Returns the error only when the card itself is unusable (stale reference
/// or lost session), in which case the card should be dropped.
pub async fn extract_summary<E: PageElement>(item: &E) -> Result<SummaryRecord, BrowserError> {
    let name = card_text(item, feed::NAME)
        .await?
        .as_deref()
        .and_then(clean_text);
    let url = card_attr(item, feed::LINK, "href")
        .await?
        .as_deref()
        .and_then(clean_text);
    let rating = card_text(item, feed::RATING)
        .await?
        .as_deref()
        .and_then(clean_text);
    let reviews_count = card_text(item, feed::REVIEWS)
        .await?
        .as_deref()
        .and_then(strip_parens);

    Ok(SummaryRecord {
        name,
        url,
        rating,
        reviews_count,
    })
}

async fn card_text<E: PageElement>(
    item: &E,
    selector: &str,
) -> Result<Option<String>, BrowserError> {
    let lookup = async {
        match item.find(selector).await? {
            Some(el) => el.text().await.map(Some),
            None => Ok(None),
        }
    };
    absorb(selector, lookup.await)
}

async fn card_attr<E: PageElement>(
    item: &E,
    selector: &str,
    attr: &str,
) -> Result<Option<String>, BrowserError> {
    let lookup = async {
        match item.find(selector).await? {
            Some(el) => el.attr(attr).await,
            None => Ok(None),
        }
    };
    absorb(selector, lookup.await)
}

/// Turns a failed field lookup into an absent value unless the card itself
/// is gone.
fn absorb(
    selector: &str,
    result: Result<Option<String>, BrowserError>,
) -> Result<Option<String>, BrowserError> {
    match result {
        Err(e) if e.is_detached() => Err(e),
        Err(e) => {
            tracing::debug!(selector, error = %e, "field lookup failed");
            Ok(None)
        }
        ok => ok,
    }
}
