use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use ap_core::{Error, Language, Result, TranslationBackend};

const DEEPL_API_BASE: &str = "https://api-free.deepl.com/v2";

#[derive(Serialize)]
struct TranslateRequest {
    text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
    target_lang: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

/// Backend for the authenticated DeepL translation API.
pub struct DeepLApiBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DeepLApiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEEPL_API_BASE)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

impl fmt::Debug for DeepLApiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepLApiBackend")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TranslationBackend for DeepLApiBackend {
    fn name(&self) -> &str {
        "deepl-api"
    }

    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let request = TranslateRequest {
            text: vec![text.to_string()],
            source_lang: match source {
                Language::Auto => None,
                lang => Some(lang.code().to_string()),
            },
            target_lang: target.code().to_string(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Translation(format!(
                "DeepL API returned status {}",
                status
            )));
        }

        let response = response.json::<TranslateResponse>().await?;
        response
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| Error::Translation("DeepL API returned no translations".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_translate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(header("Authorization", "DeepL-Auth-Key test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translations": [{"detected_source_language": "EN", "text": "これはテストです。"}]
            })))
            .mount(&server)
            .await;

        let backend = DeepLApiBackend::with_base_url("test-key", server.uri());
        let result = backend
            .translate("This is a test.", Language::En, Language::Ja)
            .await
            .unwrap();
        assert_eq!(result, "これはテストです。");
    }

    #[tokio::test]
    async fn test_translate_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(456))
            .mount(&server)
            .await;

        let backend = DeepLApiBackend::with_base_url("test-key", server.uri());
        let result = backend
            .translate("This is a test.", Language::En, Language::Ja)
            .await;
        assert!(matches!(result, Err(Error::Translation(_))));
    }
}
