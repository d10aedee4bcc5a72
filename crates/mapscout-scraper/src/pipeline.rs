//! The two-phase scrape: list the results, then visit each one.

use std::time::Duration;

use mapscout_core::{CompleteRecord, SummaryRecord};

use crate::browser::Browser;
use crate::detail::scrape_details;
use crate::list::collect_listings;
use crate::settings::ScrapeSettings;

/// Runs the list phase for `query`, then the detail phase for every result
/// that has a link, merging each detail page into its summary.
///
/// Results without a link are kept as summary-only records. `inter_request_delay`
/// is slept after each detail page. Output order matches feed order.
pub async fn scrape_complete<B: Browser>(
    browser: &B,
    query: &str,
    settings: &ScrapeSettings,
    inter_request_delay: Duration,
) -> Vec<CompleteRecord> {
    tracing::info!(query, "step 1: scraping result list");
    let listings = collect_listings(browser, query, settings).await;
    if listings.is_empty() {
        tracing::warn!(query, "no results found");
        return Vec::new();
    }

    let total = listings.len();
    tracing::info!(total, "step 2: scraping details for each result");

    let mut complete = Vec::with_capacity(total);
    for (idx, summary) in listings.iter().enumerate() {
        let position = idx + 1;
        complete.push(
            complete_one(browser, summary, settings, inter_request_delay, position, total).await,
        );
    }
    complete
}

async fn complete_one<B: Browser>(
    browser: &B,
    summary: &SummaryRecord,
    settings: &ScrapeSettings,
    inter_request_delay: Duration,
    position: usize,
    total: usize,
) -> CompleteRecord {
    let Some(url) = summary.url.as_deref() else {
        tracing::info!(position, total, name = summary.label(), "skipping result without a link");
        return CompleteRecord::from(summary);
    };

    tracing::info!(position, total, name = summary.label(), "processing");
    let detail = scrape_details(browser, url, settings).await;

    if !inter_request_delay.is_zero() {
        tokio::time::sleep(inter_request_delay).await;
    }

    CompleteRecord::merge(summary, &detail)
}
