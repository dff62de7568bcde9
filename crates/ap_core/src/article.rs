use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detex::detex;

/// One arXiv paper, or a translated copy of one.
///
/// A translated copy keeps a back-reference to the record it was derived
/// from in `original`, so formatting code can mix translated text with the
/// untranslated title, authors and links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub arxiv_url: String,
    pub published: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<Box<Article>>,
}

impl Article {
    /// Build an article from raw feed fields, stripping TeX control
    /// commands from the title and summary.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        summary: impl Into<String>,
        arxiv_url: impl Into<String>,
        published: DateTime<Utc>,
    ) -> Self {
        Self {
            title: detex(&title.into()),
            authors,
            summary: detex(&summary.into()),
            arxiv_url: arxiv_url.into(),
            published,
            original: None,
        }
    }

    /// URL of the PDF version of the paper.
    pub fn arxiv_pdf_url(&self) -> String {
        self.arxiv_url.replace("/abs/", "/pdf/")
    }

    /// The untranslated record: `self` when this article is not a
    /// translated copy.
    pub fn original(&self) -> &Article {
        self.original.as_deref().unwrap_or(self)
    }

    /// Text form sent to a translation backend: title and summary joined
    /// with a newline. [`Article::replace_text`] is the inverse.
    pub fn join_text(&self) -> String {
        format!("{}\n{}", self.title, self.summary)
    }

    /// Return a new article with the text fields replaced by a translated
    /// reply, keeping `self` reachable as the original. `self` is not
    /// modified.
    ///
    /// The first line of the reply becomes the title and the remainder the
    /// summary; a reply without a newline replaces the title only.
    pub fn replace_text(&self, translated: &str) -> Article {
        let (title, summary) = match translated.split_once('\n') {
            Some((title, summary)) => (title.to_string(), summary.to_string()),
            None => (translated.to_string(), self.summary.clone()),
        };

        Article {
            title,
            summary,
            authors: self.authors.clone(),
            arxiv_url: self.arxiv_url.clone(),
            published: self.published,
            original: Some(Box::new(self.clone())),
        }
    }
}
