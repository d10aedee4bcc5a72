pub mod browser;
pub mod detail;
pub mod error;
pub mod list;
pub mod parse;
pub mod pipeline;
pub mod scroll;
pub mod search;
pub mod selectors;
pub mod settings;
pub mod webdriver;

pub use browser::{Browser, PageElement};
pub use detail::scrape_details;
pub use error::{BrowserError, ScraperError};
pub use list::collect_listings;
pub use pipeline::scrape_complete;
pub use scroll::{scroll_to_exhaustion, ScrollOutcome, ScrollPolicy};
pub use search::search_url;
pub use settings::ScrapeSettings;
pub use webdriver::{SessionOptions, WebDriverBrowser};
