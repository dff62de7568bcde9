use std::sync::Arc;

use ap_core::{Error, Result, TranslationBackend};

use crate::{Config, Mode};

pub mod browser;
pub mod deepl;

pub use browser::BrowserBackend;
pub use deepl::DeepLApiBackend;

/// Build the backend selected by the configuration.
///
/// Fails with [`Error::Config`] before any network activity when the API
/// mode is selected without a key. `Auto` resolves to the API when a key
/// is present and to the browser otherwise.
pub fn create_backend(config: &Config) -> Result<Arc<dyn TranslationBackend>> {
    let mode = match config.mode {
        Mode::Auto if config.api_key.is_some() => Mode::Api,
        Mode::Auto => Mode::Browser,
        mode => mode,
    };

    match mode {
        Mode::Api => {
            let key = config
                .api_key
                .clone()
                .ok_or_else(|| Error::Config("API mode requires an API key".to_string()))?;
            Ok(Arc::new(DeepLApiBackend::new(key)))
        }
        Mode::Browser => Ok(Arc::new(BrowserBackend::new(
            config.webdriver_url.clone(),
            config.timeout,
        ))),
        Mode::Auto => unreachable!("Auto is resolved above"),
    }
}
