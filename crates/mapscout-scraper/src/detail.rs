//! Place page extraction.
//!
//! Every field has its own extractor, and every extractor swallows its own
//! failures, so a page that is missing half its markup still yields whatever
//! is there. Only a failed navigation produces [`DetailRecord::Failed`].

use mapscout_core::{DetailRecord, PlaceDetails};

use crate::browser::{Browser, PageElement};
use crate::error::BrowserError;
use crate::parse::{clean_text, join_non_empty, review_count_from_label, review_snippet};
use crate::selectors::place;
use crate::settings::ScrapeSettings;

/// Visits `url` and reads every detail field from the page.
pub async fn scrape_details<B: Browser>(
    browser: &B,
    url: &str,
    settings: &ScrapeSettings,
) -> DetailRecord {
    tracing::info!(url, "scraping details");

    if let Err(e) = browser.goto(url).await {
        tracing::warn!(url, error = %e, "failed to open place page");
        return DetailRecord::failed(url, e.to_string());
    }

    // The title is the last thing the page renders into the header card.
    if let Err(e) = browser.wait_for(place::TITLE, settings.detail_timeout).await {
        tracing::debug!(url, error = %e, "place title not ready; extracting anyway");
    }

    let (current_status, hours_summary) = hours(browser).await.unzip();

    DetailRecord::Extracted(PlaceDetails {
        name: text(browser, place::TITLE).await,
        rating: text(browser, place::RATING).await,
        total_reviews: total_reviews(browser).await,
        price_range: text(browser, place::PRICE).await,
        cuisine_type: text(browser, place::CATEGORY).await,
        description: text(browser, place::DESCRIPTION).await,
        service_options: service_options(browser).await,
        address: text(browser, place::ADDRESS).await,
        current_status,
        hours_summary,
        phone: text(browser, place::PHONE).await,
        website: href(browser, place::WEBSITE).await,
        plus_code: text(browser, place::PLUS_CODE).await,
        menu_link: href(browser, place::MENU).await,
        reservation_link: href(browser, place::RESERVATION).await,
        has_popular_times: has_popular_times(browser).await,
        accessibility: accessibility(browser).await,
        recent_review: recent_review(browser).await,
        detail_url: url.to_owned(),
    })
}

async fn total_reviews<B: Browser>(browser: &B) -> Option<String> {
    attr(browser, place::REVIEWS_LABEL, "aria-label")
        .await
        .as_deref()
        .and_then(review_count_from_label)
}

async fn service_options<B: Browser>(browser: &B) -> Option<String> {
    let lookup = async {
        let mut options = Vec::new();
        for el in browser.find_all(place::SERVICE_OPTIONS).await? {
            options.push(el.text().await?);
        }
        Ok::<_, BrowserError>(options)
    };
    join_non_empty(settle(place::SERVICE_OPTIONS, lookup.await)?)
}

/// Open status and hours summary come from the same hours card; if any step
/// fails neither is reported.
async fn hours<B: Browser>(browser: &B) -> Option<(String, String)> {
    let lookup = async {
        if browser.find(place::HOURS_TOGGLE).await?.is_none() {
            return Ok(None);
        }
        let Some(status) = browser.find(place::OPEN_STATUS).await? else {
            return Ok(None);
        };
        let Some(summary) = browser.find(place::HOURS_SUMMARY).await? else {
            return Ok(None);
        };
        let status = clean_text(&status.text().await?);
        let summary = clean_text(&summary.text().await?);
        Ok::<_, BrowserError>(status.zip(summary))
    };
    settle(place::HOURS_TOGGLE, lookup.await).flatten()
}

/// `Yes`/`No` field: any lookup failure counts as no chart.
async fn has_popular_times<B: Browser>(browser: &B) -> bool {
    settle(place::POPULAR_TIMES, browser.find_all(place::POPULAR_TIMES).await)
        .is_some_and(|charts| !charts.is_empty())
}

async fn accessibility<B: Browser>(browser: &B) -> Option<String> {
    let lookup = async {
        let mut features = Vec::new();
        for el in browser.find_all(place::ACCESSIBILITY).await? {
            if let Some(tooltip) = el.attr("data-tooltip").await? {
                features.push(tooltip);
            }
        }
        Ok::<_, BrowserError>(features)
    };
    join_non_empty(settle(place::ACCESSIBILITY, lookup.await)?)
}

async fn recent_review<B: Browser>(browser: &B) -> Option<String> {
    text(browser, place::RECENT_REVIEW)
        .await
        .as_deref()
        .and_then(review_snippet)
}

async fn text<B: Browser>(browser: &B, selector: &str) -> Option<String> {
    let lookup = async {
        match browser.find(selector).await? {
            Some(el) => el.text().await.map(Some),
            None => Ok(None),
        }
    };
    settle(selector, lookup.await)
        .flatten()
        .as_deref()
        .and_then(clean_text)
}

async fn attr<B: Browser>(browser: &B, selector: &str, name: &str) -> Option<String> {
    let lookup = async {
        match browser.find(selector).await? {
            Some(el) => el.attr(name).await,
            None => Ok(None),
        }
    };
    settle(selector, lookup.await)
        .flatten()
        .as_deref()
        .and_then(clean_text)
}

async fn href<B: Browser>(browser: &B, selector: &str) -> Option<String> {
    attr(browser, selector, "href").await
}

/// Logs a failed lookup and reports it as absent.
fn settle<T>(selector: &str, result: Result<T, BrowserError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(selector, error = %e, "field extraction failed");
            None
        }
    }
}
