//! [`Browser`] backed by a WebDriver session (chromedriver) via `fantoccini`.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::error::{CmdError, ErrorStatus};
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};

use crate::browser::{Browser, PageElement};
use crate::error::{BrowserError, ScraperError};

/// How the Chrome session should present itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// BCP 47 tag used for `Accept-Language` and the UI language.
    pub locale: String,
    pub headless: bool,
}

/// A live Chrome session driven over the WebDriver protocol.
pub struct WebDriverBrowser {
    client: Client,
}

impl WebDriverBrowser {
    /// Opens a new Chrome session on the WebDriver server at `webdriver_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Session`] if the server is unreachable or
    /// refuses the capabilities.
    pub async fn connect(
        webdriver_url: &str,
        options: &SessionOptions,
    ) -> Result<Self, ScraperError> {
        tracing::info!(
            webdriver_url,
            locale = %options.locale,
            headless = options.headless,
            "starting browser session"
        );
        let client = ClientBuilder::native()
            .capabilities(chrome_capabilities(options))
            .connect(webdriver_url)
            .await
            .map_err(|e| ScraperError::Session {
                webdriver_url: webdriver_url.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl Browser for WebDriverBrowser {
    type Element = WebDriverElement;

    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.client.goto(url).await.map_err(classify)
    }

    async fn wait_for(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<Self::Element, BrowserError> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
        {
            Ok(inner) => Ok(WebDriverElement { inner }),
            Err(CmdError::WaitTimeout) => Err(BrowserError::Timeout {
                selector: selector.to_owned(),
            }),
            Err(e) => Err(classify(e)),
        }
    }

    async fn find(&self, selector: &str) -> Result<Option<Self::Element>, BrowserError> {
        found(self.client.find(Locator::Css(selector)).await)
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, BrowserError> {
        let elements = self
            .client
            .find_all(Locator::Css(selector))
            .await
            .map_err(classify)?;
        Ok(elements
            .into_iter()
            .map(|inner| WebDriverElement { inner })
            .collect())
    }

    async fn execute_on(
        &self,
        script: &str,
        element: &Self::Element,
    ) -> Result<Value, BrowserError> {
        let arg = serde_json::to_value(&element.inner)
            .map_err(|e| BrowserError::Command(format!("cannot pass element to script: {e}")))?;
        self.client
            .execute(script, vec![arg])
            .await
            .map_err(classify)
    }

    async fn quit(self) -> Result<(), BrowserError> {
        tracing::info!("closing browser session");
        self.client.close().await.map_err(classify)
    }
}

/// Element handle inside a [`WebDriverBrowser`] page.
#[derive(Debug, Clone)]
pub struct WebDriverElement {
    inner: Element,
}

impl PageElement for WebDriverElement {
    async fn text(&self) -> Result<String, BrowserError> {
        self.inner.text().await.map_err(classify)
    }

    async fn attr(&self, name: &str) -> Result<Option<String>, BrowserError> {
        self.inner.attr(name).await.map_err(classify)
    }

    async fn find(&self, selector: &str) -> Result<Option<Self>, BrowserError> {
        found(self.inner.find(Locator::Css(selector)).await)
    }
}

fn found(result: Result<Element, CmdError>) -> Result<Option<WebDriverElement>, BrowserError> {
    match result {
        Ok(inner) => Ok(Some(WebDriverElement { inner })),
        Err(e) if e.is_no_such_element() => Ok(None),
        Err(e) => Err(classify(e)),
    }
}

fn classify(err: CmdError) -> BrowserError {
    match &err {
        CmdError::Standard(wd) if wd.error == ErrorStatus::StaleElementReference => {
            BrowserError::StaleElement(err.to_string())
        }
        CmdError::Standard(wd) if wd.error == ErrorStatus::InvalidSessionId => {
            BrowserError::SessionLost(err.to_string())
        }
        _ => BrowserError::Command(err.to_string()),
    }
}

/// Chrome capabilities: locale preference, automation-detection switches
/// turned off, maximized window.
#[must_use]
pub fn chrome_capabilities(options: &SessionOptions) -> Map<String, Value> {
    let mut args = vec![
        "--start-maximized".to_owned(),
        "--disable-blink-features=AutomationControlled".to_owned(),
        format!("--lang={}", options.locale),
    ];
    if options.headless {
        args.push("--headless=new".to_owned());
    }

    let mut caps = Map::new();
    caps.insert("browserName".to_owned(), json!("chrome"));
    caps.insert(
        "goog:chromeOptions".to_owned(),
        json!({
            "args": args,
            "excludeSwitches": ["enable-automation"],
            "useAutomationExtension": false,
            "prefs": {
                "intl.accept_languages": options.locale,
                "profile.default_content_setting_values.geolocation": 1,
            },
        }),
    );
    caps
}
