use std::time::Duration;

use async_trait::async_trait;
use fantoccini::{ClientBuilder, Locator};
use tokio::time::Instant;

use ap_core::{Error, Language, Result, TranslationBackend};

const DEEPL_TRANSLATOR: &str = "https://www.deepl.com/translator";
const DEEPL_OUTPUT: &str = "#target-dummydiv";
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// No-credential fallback backend: drives the DeepL web translator
/// through a WebDriver session (chromedriver or geckodriver).
///
/// The text is passed in the URL fragment and the output element is
/// polled until non-empty text appears.
#[derive(Debug, Clone)]
pub struct BrowserBackend {
    webdriver_url: String,
    timeout: Duration,
}

impl BrowserBackend {
    pub fn new(webdriver_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            timeout,
        }
    }

    async fn poll_output(&self, client: &fantoccini::Client, url: &str) -> Result<String> {
        client
            .goto(url)
            .await
            .map_err(|e| Error::Translation(format!("Failed to open translator: {}", e)))?;

        let deadline = Instant::now() + self.timeout;
        loop {
            if let Ok(elem) = client.find(Locator::Css(DEEPL_OUTPUT)).await {
                if let Ok(content) = elem.text().await {
                    let content = content.trim();
                    if !content.is_empty() {
                        return Ok(content.to_string());
                    }
                }
            }

            if Instant::now() >= deadline {
                return Err(Error::Translation(
                    "Timed out waiting for a translation to appear".to_string(),
                ));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl TranslationBackend for BrowserBackend {
    fn name(&self) -> &str {
        "browser"
    }

    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let client = ClientBuilder::native()
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| {
                Error::Translation(format!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url, e
                ))
            })?;

        let url = format!(
            "{}#{}/{}/{}",
            DEEPL_TRANSLATOR,
            source,
            target,
            urlencoding::encode(text),
        );

        let outcome = self.poll_output(&client, &url).await;
        client.close().await.ok();
        outcome
    }
}
