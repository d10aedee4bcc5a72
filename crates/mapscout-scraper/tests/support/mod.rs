//! In-memory [`Browser`] for driving the collectors without a WebDriver server.
//!
//! Pages are keyed by URL and hold, per CSS selector, the elements that
//! selector matches. Scroll-height scripts replay a scripted sequence of
//! heights, repeating the last one once the sequence runs out.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use serde_json::{json, Value};

use mapscout_scraper::{Browser, BrowserError, PageElement, ScrapeSettings, ScrollPolicy};

/// Settings with every pause zeroed so tests run instantly.
pub fn fast_settings() -> ScrapeSettings {
    ScrapeSettings {
        feed_timeout: Duration::ZERO,
        scroll: ScrollPolicy {
            pause: Duration::ZERO,
            stable_reads: 3,
            max_scrolls: 50,
        },
        list_settle: Duration::ZERO,
        detail_timeout: Duration::ZERO,
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    text: String,
    attrs: HashMap<String, String>,
    children: HashMap<String, FakeElement>,
    stale: bool,
    broken: HashSet<String>,
}

impl FakeElement {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn child(mut self, selector: &str, child: FakeElement) -> Self {
        self.children.insert(selector.to_owned(), child);
        self
    }

    /// Every call on this element fails with a stale reference.
    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }

    /// Looking up `selector` under this element fails with a command error.
    pub fn broken(mut self, selector: &str) -> Self {
        self.broken.insert(selector.to_owned());
        self
    }

    fn check(&self) -> Result<(), BrowserError> {
        if self.stale {
            Err(BrowserError::StaleElement("element is detached".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl PageElement for FakeElement {
    async fn text(&self) -> Result<String, BrowserError> {
        self.check()?;
        Ok(self.text.clone())
    }

    async fn attr(&self, name: &str) -> Result<Option<String>, BrowserError> {
        self.check()?;
        Ok(self.attrs.get(name).cloned())
    }

    async fn find(&self, selector: &str) -> Result<Option<Self>, BrowserError> {
        self.check()?;
        if self.broken.contains(selector) {
            return Err(BrowserError::Command(format!("lookup of {selector} failed")));
        }
        Ok(self.children.get(selector).cloned())
    }
}

/// Selector -> matching elements for one page.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    elements: HashMap<String, Vec<FakeElement>>,
    broken: HashSet<String>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: &str, element: FakeElement) -> Self {
        self.elements
            .entry(selector.to_owned())
            .or_default()
            .push(element);
        self
    }

    pub fn with_all(mut self, selector: &str, elements: Vec<FakeElement>) -> Self {
        self.elements
            .entry(selector.to_owned())
            .or_default()
            .extend(elements);
        self
    }

    /// Any lookup of `selector` on this page fails with a command error.
    pub fn broken(mut self, selector: &str) -> Self {
        self.broken.insert(selector.to_owned());
        self
    }
}

#[derive(Debug, Default)]
pub struct FakeBrowser {
    pages: HashMap<String, FakePage>,
    unreachable: HashSet<String>,
    current: RefCell<FakePage>,
    heights: Vec<u64>,
    height_reads: Cell<usize>,
    scroll_error: bool,
    pub visited: RefCell<Vec<String>>,
    pub scrolls: Cell<u32>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, page: FakePage) -> Self {
        self.pages.insert(url.to_owned(), page);
        self
    }

    /// Navigating to `url` fails.
    pub fn unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_owned());
        self
    }

    /// Successive `scrollHeight` readings.
    pub fn heights(mut self, heights: &[u64]) -> Self {
        self.heights = heights.to_vec();
        self
    }

    /// Scroll scripts fail with a command error.
    pub fn scroll_error(mut self) -> Self {
        self.scroll_error = true;
        self
    }

    pub fn height_reads(&self) -> usize {
        self.height_reads.get()
    }

    fn lookup(&self, selector: &str) -> Result<Vec<FakeElement>, BrowserError> {
        let page = self.current.borrow();
        if page.broken.contains(selector) {
            return Err(BrowserError::Command(format!("lookup of {selector} failed")));
        }
        Ok(page.elements.get(selector).cloned().unwrap_or_default())
    }

    fn next_height(&self) -> Value {
        let idx = self.height_reads.get();
        self.height_reads.set(idx + 1);
        let height = self
            .heights
            .get(idx)
            .or_else(|| self.heights.last())
            .copied()
            .unwrap_or(0);
        json!(height)
    }
}

impl Browser for FakeBrowser {
    type Element = FakeElement;

    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.visited.borrow_mut().push(url.to_owned());
        if self.unreachable.contains(url) {
            return Err(BrowserError::Command(format!("net::ERR_NAME_NOT_RESOLVED at {url}")));
        }
        *self.current.borrow_mut() = self.pages.get(url).cloned().unwrap_or_default();
        Ok(())
    }

    async fn wait_for(
        &self,
        selector: &str,
        _timeout: Duration,
    ) -> Result<Self::Element, BrowserError> {
        self.lookup(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::Timeout {
                selector: selector.to_owned(),
            })
    }

    async fn find(&self, selector: &str) -> Result<Option<Self::Element>, BrowserError> {
        Ok(self.lookup(selector)?.into_iter().next())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, BrowserError> {
        self.lookup(selector)
    }

    async fn execute_on(
        &self,
        script: &str,
        _element: &Self::Element,
    ) -> Result<Value, BrowserError> {
        if self.scroll_error {
            return Err(BrowserError::Command("javascript error".to_owned()));
        }
        if script.starts_with("return") {
            Ok(self.next_height())
        } else {
            self.scrolls.set(self.scrolls.get() + 1);
            Ok(Value::Null)
        }
    }

    async fn quit(self) -> Result<(), BrowserError> {
        Ok(())
    }
}
