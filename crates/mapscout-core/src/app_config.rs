use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webdriver_url: String,
    pub log_level: String,
    pub headless: bool,
    pub output_path: PathBuf,
    pub feed_timeout_secs: u64,
    pub scroll_pause_ms: u64,
    pub scroll_stable_reads: u32,
    pub scroll_max_iterations: u32,
    pub list_settle_ms: u64,
    pub detail_timeout_secs: u64,
    pub inter_request_delay_ms: u64,
}

impl AppConfig {
    #[must_use]
    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }

    #[must_use]
    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }

    #[must_use]
    pub fn list_settle(&self) -> Duration {
        Duration::from_millis(self.list_settle_ms)
    }

    #[must_use]
    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }

    #[must_use]
    pub fn inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.inter_request_delay_ms)
    }
}
