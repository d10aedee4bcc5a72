//! CSS selectors for the maps search and place pages.
//!
//! These track the site's current markup and are the first thing to check
//! when fields start coming back empty.

/// Search results view.
pub mod feed {
    /// The scrollable results container.
    pub const CONTAINER: &str = "div[role='feed']";
    /// One result card inside the feed.
    pub const ITEM: &str = "div[role='article']";

    pub const NAME: &str = ".qBF1Pd";
    pub const LINK: &str = "a.hfpxzc";
    pub const RATING: &str = ".MW4etd";
    pub const REVIEWS: &str = ".UY7F9";
}

/// A single place page.
pub mod place {
    pub const TITLE: &str = "h1.DUwDvf";
    pub const RATING: &str = ".F7nice span[aria-hidden='true']";
    /// Carries the review count in its `aria-label`.
    pub const REVIEWS_LABEL: &str = ".F7nice span[role='img']";
    pub const PRICE: &str = ".mgr77e span";
    pub const CATEGORY: &str = "button.DkEaL";
    pub const DESCRIPTION: &str = ".PYvSYb";
    pub const SERVICE_OPTIONS: &str = ".LTs0Rc div[aria-hidden='true']";
    pub const ADDRESS: &str = "button[data-item-id='address'] .Io6YTe";
    pub const HOURS_TOGGLE: &str = ".OMl5r.hH0dDd";
    pub const OPEN_STATUS: &str = ".ZDu9vd span";
    pub const HOURS_SUMMARY: &str = ".ZDu9vd";
    pub const PHONE: &str = "button[data-item-id^='phone'] .Io6YTe";
    pub const WEBSITE: &str = "a[data-item-id='authority']";
    pub const PLUS_CODE: &str = "button[data-item-id='oloc'] .Io6YTe";
    pub const MENU: &str = "a[data-item-id='menu']";
    pub const RESERVATION: &str = "a[data-item-id='action:1']";
    pub const POPULAR_TIMES: &str = ".UmE4Qe";
    pub const ACCESSIBILITY: &str = "span.google-symbols[data-tooltip*='accessible']";
    pub const RECENT_REVIEW: &str = ".MyEned .wiI7pd";
}
