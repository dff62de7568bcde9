use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Languages supported by the translation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Automatic detection (source side only).
    Auto,
    Bg,
    Cs,
    Da,
    De,
    El,
    En,
    Es,
    Et,
    Fi,
    Fr,
    Hu,
    It,
    Ja,
    Lt,
    Lv,
    Nl,
    Pl,
    Pt,
    Ro,
    Ru,
    Sk,
    Sl,
    Sv,
    Zh,
}

impl Language {
    /// Uppercase code as the DeepL API expects it.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Auto => "AUTO",
            Language::Bg => "BG",
            Language::Cs => "CS",
            Language::Da => "DA",
            Language::De => "DE",
            Language::El => "EL",
            Language::En => "EN",
            Language::Es => "ES",
            Language::Et => "ET",
            Language::Fi => "FI",
            Language::Fr => "FR",
            Language::Hu => "HU",
            Language::It => "IT",
            Language::Ja => "JA",
            Language::Lt => "LT",
            Language::Lv => "LV",
            Language::Nl => "NL",
            Language::Pl => "PL",
            Language::Pt => "PT",
            Language::Ro => "RO",
            Language::Ru => "RU",
            Language::Sk => "SK",
            Language::Sl => "SL",
            Language::Sv => "SV",
            Language::Zh => "ZH",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code().to_lowercase())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Language::Auto),
            "bg" => Ok(Language::Bg),
            "cs" => Ok(Language::Cs),
            "da" => Ok(Language::Da),
            "de" => Ok(Language::De),
            "el" => Ok(Language::El),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "et" => Ok(Language::Et),
            "fi" => Ok(Language::Fi),
            "fr" => Ok(Language::Fr),
            "hu" => Ok(Language::Hu),
            "it" => Ok(Language::It),
            "ja" => Ok(Language::Ja),
            "lt" => Ok(Language::Lt),
            "lv" => Ok(Language::Lv),
            "nl" => Ok(Language::Nl),
            "pl" => Ok(Language::Pl),
            "pt" => Ok(Language::Pt),
            "ro" => Ok(Language::Ro),
            "ru" => Ok(Language::Ru),
            "sk" => Ok(Language::Sk),
            "sl" => Ok(Language::Sl),
            "sv" => Ok(Language::Sv),
            "zh" => Ok(Language::Zh),
            other => Err(Error::Config(format!("Unknown language: {}", other))),
        }
    }
}
