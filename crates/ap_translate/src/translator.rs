use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use ap_core::{Article, Language, TranslationBackend};

use crate::Config;

/// Batch driver over a [`TranslationBackend`]: bounded concurrency,
/// per-call timeout, output order matching input order.
///
/// Partial failures are soft: an item that fails or times out keeps its
/// original text and is logged at WARN, and the rest of the batch is
/// unaffected.
pub struct Translator {
    backend: Arc<dyn TranslationBackend>,
    source: Language,
    target: Language,
    n_concurrent: usize,
    timeout: Duration,
}

impl Translator {
    pub fn new(backend: Arc<dyn TranslationBackend>, config: &Config) -> Self {
        Self {
            backend,
            source: config.source_lang,
            target: config.target_lang,
            n_concurrent: config.n_concurrent.max(1),
            timeout: config.timeout,
        }
    }

    /// Translate a batch of texts. The output has one entry per input, in
    /// input order, regardless of the concurrency degree.
    pub async fn translate_batch(&self, texts: Vec<String>) -> Vec<String> {
        if self.source == self.target {
            return texts;
        }

        // `buffered` polls up to n futures at once but yields results in
        // the order the futures were produced.
        stream::iter(texts)
            .map(|text| self.translate_one(text))
            .buffered(self.n_concurrent)
            .collect()
            .await
    }

    /// Translate articles by joining title and summary, translating the
    /// joined text and splitting it back. Each translated article keeps
    /// its source reachable through `original`.
    pub async fn translate_articles(&self, articles: Vec<Article>) -> Vec<Article> {
        if self.source == self.target {
            return articles;
        }

        let texts = articles.iter().map(Article::join_text).collect();
        let translated = self.translate_batch(texts).await;

        articles
            .into_iter()
            .zip(translated)
            .map(|(article, text)| {
                if text == article.join_text() {
                    // Untranslated fallback; keep the record as is.
                    article
                } else {
                    article.replace_text(&text)
                }
            })
            .collect()
    }

    async fn translate_one(&self, text: String) -> String {
        if text.trim().is_empty() {
            return text;
        }

        let call = self.backend.translate(&text, self.source, self.target);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(translated)) => translated,
            Ok(Err(e)) => {
                tracing::warn!(backend = self.backend.name(), error = %e, "translation failed, keeping original text");
                text
            }
            Err(_) => {
                tracing::warn!(backend = self.backend.name(), timeout = ?self.timeout, "translation timed out, keeping original text");
                text
            }
        }
    }
}
