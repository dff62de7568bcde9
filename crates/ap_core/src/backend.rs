use async_trait::async_trait;

use crate::{Language, Result};

/// A service that can translate text between two languages.
///
/// Callers depend on this interface only; whether the work happens through
/// the authenticated DeepL API or a driven browser session is a backend
/// detail.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Translate one text from `source` to `target`.
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String>;
}
