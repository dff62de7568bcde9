use ap_core::{Article, Error, Result};

use crate::feed::parse_feed;
use crate::query::SearchParams;

pub const ARXIV_API_BASE: &str = "http://export.arxiv.org/api/query";

/// Client for the arXiv metadata API.
pub struct ArxivClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArxivClient {
    pub fn new() -> Self {
        Self::with_base_url(ARXIV_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for articles matching the given filters.
    ///
    /// Results are ordered by submission date, ascending. An empty result
    /// set is not an error; an unreachable service or non-success status
    /// is [`Error::SourceUnavailable`].
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<Article>> {
        let url = params.to_url(&self.base_url);
        tracing::debug!(url = %url, "searching arXiv");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::SourceUnavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SourceUnavailable(format!(
                "arXiv API returned status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::SourceUnavailable(format!("Failed to read response: {}", e)))?;

        // The API treats the submittedDate range as inclusive on both ends;
        // drop entries outside the documented [start, end) window.
        let articles: Vec<Article> = parse_feed(&body)?
            .into_iter()
            .filter(|a| a.published >= params.start_date && a.published < params.end_date)
            .collect();

        tracing::debug!(count = articles.len(), "articles found");
        Ok(articles)
    }
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new()
    }
}
