//! Supported languages and the keys that select them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Languages with a number converter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Russian,
    Spanish,
    Turkish,
    Ukrainian,
    Bulgarian,
    Amharic,
    Polish,
    Belarusian,
    Latvian,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::French,
        Language::Russian,
        Language::Spanish,
        Language::Turkish,
        Language::Ukrainian,
        Language::Bulgarian,
        Language::Amharic,
        Language::Polish,
        Language::Belarusian,
        Language::Latvian,
    ];

    /// Resolve a language name, ISO 639-1 code or culture tag
    ///
    /// Matching ignores case and accepts `_` as the culture separator,
    /// so `"english"`, `"en"`, `"en-US"` and `"en_gb"` all select English.
    pub fn from_key(key: &str) -> Result<Self> {
        let normalized = key.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|language| language.matches(&normalized))
            .ok_or_else(|| Error::UnsupportedLanguage(key.to_string()))
    }

    fn matches(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(self.code())
            || key.eq_ignore_ascii_case(self.name())
            || self
                .cultures()
                .iter()
                .any(|culture| key.eq_ignore_ascii_case(culture))
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Bulgarian => "bg",
            Language::Amharic => "am",
            Language::Polish => "pl",
            Language::Belarusian => "be",
            Language::Latvian => "lv",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Turkish => "Turkish",
            Language::Ukrainian => "Ukrainian",
            Language::Bulgarian => "Bulgarian",
            Language::Amharic => "Amharic",
            Language::Polish => "Polish",
            Language::Belarusian => "Belarusian",
            Language::Latvian => "Latvian",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::Russian => "Русский",
            Language::Spanish => "Español",
            Language::Turkish => "Türkçe",
            Language::Ukrainian => "Українська",
            Language::Bulgarian => "Български",
            Language::Amharic => "አማርኛ",
            Language::Polish => "Polski",
            Language::Belarusian => "Беларуская",
            Language::Latvian => "Latviešu",
        }
    }

    /// Culture tags that select this language
    pub fn cultures(&self) -> &'static [&'static str] {
        match self {
            Language::English => &["en-US", "en-GB"],
            Language::French => &["fr-FR"],
            Language::Russian => &["ru-RU"],
            Language::Spanish => &["es-ES"],
            Language::Turkish => &["tr-TR"],
            Language::Ukrainian => &["uk-UA"],
            Language::Bulgarian => &["bg-BG"],
            Language::Amharic => &["am-ET"],
            Language::Polish => &["pl-PL"],
            Language::Belarusian => &["be-BY"],
            Language::Latvian => &["lv-LV"],
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
