//! One scrape run: open a browser session, collect, export, close.

use anyhow::Context;
use mapscout_core::{resolve_locale, AppConfig};
use mapscout_export::{export_xlsx, ExportSummary};
use mapscout_scraper::{scrape_complete, Browser, ScrapeSettings, SessionOptions, WebDriverBrowser};

/// Opens a Chrome session for `query` and hands it to [`run_session`].
pub(crate) async fn scrape_to_file(
    query: &str,
    config: &AppConfig,
) -> anyhow::Result<Option<ExportSummary>> {
    let options = SessionOptions {
        locale: resolve_locale(query).to_owned(),
        headless: config.headless,
    };
    let browser = WebDriverBrowser::connect(&config.webdriver_url, &options)
        .await
        .context("failed to start browser session")?;

    run_session(browser, query, config).await
}

/// Runs the full pipeline for `query` on `browser` and writes the workbook
/// to `config.output_path`.
///
/// The session is closed whether or not the scrape and export succeed; a
/// scrape or export failure is reported ahead of a failure to close.
/// Returns `None` when the search found nothing and no file was written.
pub(crate) async fn run_session<B: Browser>(
    browser: B,
    query: &str,
    config: &AppConfig,
) -> anyhow::Result<Option<ExportSummary>> {
    let result = scrape_and_export(&browser, query, config).await;
    let closed = browser
        .quit()
        .await
        .context("failed to close browser session");

    let summary = result?;
    closed?;
    Ok(summary)
}

async fn scrape_and_export<B: Browser>(
    browser: &B,
    query: &str,
    config: &AppConfig,
) -> anyhow::Result<Option<ExportSummary>> {
    let settings = ScrapeSettings::from(config);
    let records = scrape_complete(browser, query, &settings, config.inter_request_delay()).await;
    tracing::info!(total = records.len(), "scrape finished");

    tracing::info!(path = %config.output_path.display(), "step 3: exporting");
    export_xlsx(&records, &config.output_path)
        .with_context(|| format!("failed to export to {}", config.output_path.display()))
}
