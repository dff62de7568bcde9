use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use ap_core::{Error, Language};

pub mod backends;
pub mod translator;

pub use backends::create_backend;
pub use translator::Translator;

/// How translation requests are carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Use the API when a key is configured, the browser otherwise.
    Auto,
    /// Authenticated DeepL API; requires a key.
    Api,
    /// WebDriver session against the DeepL web UI; no credential needed.
    Browser,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Auto => write!(f, "auto"),
            Mode::Api => write!(f, "api"),
            Mode::Browser => write!(f, "browser"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "api" => Ok(Mode::Api),
            "browser" => Ok(Mode::Browser),
            other => Err(Error::Config(format!("Unknown translation mode: {}", other))),
        }
    }
}

/// Translator configuration, built once at the CLI boundary.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub api_key: Option<String>,
    pub webdriver_url: String,
    pub source_lang: Language,
    pub target_lang: Language,
    pub n_concurrent: usize,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            api_key: None,
            webdriver_url: "http://localhost:4444".to_string(),
            source_lang: Language::En,
            target_lang: Language::Ja,
            n_concurrent: 2,
            timeout: Duration::from_secs(30),
        }
    }
}

pub mod prelude {
    pub use super::{create_backend, Config, Mode, Translator};
    pub use ap_core::{Article, Error, Language, Result, TranslationBackend};
}
