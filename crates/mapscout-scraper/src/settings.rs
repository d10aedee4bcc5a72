use std::time::Duration;

use mapscout_core::AppConfig;

use crate::scroll::ScrollPolicy;

/// Timing knobs for the list and detail collectors.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    /// How long to wait for the results feed before giving up on the search.
    pub feed_timeout: Duration,
    pub scroll: ScrollPolicy,
    /// Pause after scrolling settles, before cards are enumerated.
    pub list_settle: Duration,
    /// Readiness wait for a place page's title.
    pub detail_timeout: Duration,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            feed_timeout: Duration::from_secs(15),
            scroll: ScrollPolicy::default(),
            list_settle: Duration::from_secs(2),
            detail_timeout: Duration::from_secs(3),
        }
    }
}

impl From<&AppConfig> for ScrapeSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            feed_timeout: config.feed_timeout(),
            scroll: ScrollPolicy {
                pause: config.scroll_pause(),
                stable_reads: config.scroll_stable_reads,
                max_scrolls: config.scroll_max_iterations,
            },
            list_settle: config.list_settle(),
            detail_timeout: config.detail_timeout(),
        }
    }
}
