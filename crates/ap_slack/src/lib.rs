pub mod payload;

pub use payload::to_payload;

use ap_core::{Article, Error, Result};

/// Outcome of a fan-out over a batch of articles. One message failing
/// does not stop the others; failures are collected here instead.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub delivered: usize,
    /// (article URL, error text) per failed delivery.
    pub failed: Vec<(String, String)>,
}

impl DeliveryReport {
    pub fn all_delivered(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Posts articles to a Slack incoming webhook.
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
    dry_run: bool,
}

impl SlackNotifier {
    pub fn new(webhook_url: impl Into<String>, dry_run: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
            dry_run,
        }
    }

    /// Post one message per article, in order.
    ///
    /// Delivery is fail-soft: a non-success status or transport error is
    /// recorded in the report and the remaining articles are still
    /// attempted. With `dry_run` set the payloads are built and logged but
    /// nothing is sent.
    pub async fn post(&self, articles: &[Article]) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for article in articles {
            let payload = payload::to_payload(article);

            if self.dry_run {
                tracing::info!(
                    url = %article.original().arxiv_url,
                    payload = %payload,
                    "dry run, not posting"
                );
                report.delivered += 1;
                continue;
            }

            match self.deliver(&payload).await {
                Ok(()) => {
                    tracing::debug!(url = %article.original().arxiv_url, "posted");
                    report.delivered += 1;
                }
                Err(e) => {
                    tracing::warn!(url = %article.original().arxiv_url, error = %e, "failed to post");
                    report
                        .failed
                        .push((article.original().arxiv_url.clone(), e.to_string()));
                }
            }
        }

        report
    }

    async fn deliver(&self, payload: &serde_json::Value) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Delivery(format!(
                "Webhook returned status {}",
                status
            )));
        }

        Ok(())
    }
}
