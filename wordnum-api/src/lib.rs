//! Public API for wordnum number and currency spelling
//!
//! Resolves a language from a name, ISO code or culture tag, hands the
//! value to that language's converter and reports every failure as an
//! error instead of an empty string.
//!
//! ```rust
//! use wordnum_api::{decimal_to_words, integer_to_words, Decimal, GenderGroup, Options};
//!
//! assert_eq!(integer_to_words(80, "lv", GenderGroup::None).unwrap(), "astoņdesmit");
//!
//! let text = decimal_to_words(Decimal::new(101, 2), "USD", "en-US", &Options::default(), GenderGroup::None)
//!     .unwrap();
//! assert_eq!(text, "one dollar one cent");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::sync::Arc;
use wordnum_core::NumberConverter;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::SpelledValue;
pub use error::ApiError;
pub use wordnum_core::{supported_currencies, Decimal, GenderGroup, Language, Options};

/// Converter bound to a fixed language, gender and option set
///
/// Cheap to clone; all clones share the language's converter.
#[derive(Clone)]
pub struct Speller {
    inner: Arc<dyn NumberConverter>,
    config: Config,
}

impl std::fmt::Debug for Speller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speller")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Speller {
    /// Create a speller with default configuration (English)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a speller for a language name, ISO code or culture tag
    pub fn with_language(key: &str) -> Result<Self> {
        let config = Config::builder().language(key)?.build()?;
        Self::with_config(config)
    }

    /// Create a speller with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = wordnum_core::converter(config.language)?;
        log::debug!("Speller ready for {}", config.language.name());
        Ok(Self { inner, config })
    }

    /// Spell an integer
    pub fn integer(&self, value: i64) -> Result<String> {
        let value = u64::try_from(value).map_err(|_| ApiError::NegativeValue(value))?;
        Ok(self.inner.to_words_with_gender(value, self.config.gender)?)
    }

    /// Spell a currency amount
    pub fn amount(&self, value: Decimal, currency: &str) -> Result<String> {
        Ok(self.inner.currency_to_words(
            value,
            currency,
            &self.config.options,
            self.config.gender,
        )?)
    }

    /// Spell an integer into a DTO
    pub fn integer_value(&self, value: i64) -> Result<SpelledValue> {
        let text = self.integer(value)?;
        Ok(SpelledValue::new(
            value.to_string(),
            self.config.language.code(),
            text,
        ))
    }

    /// Spell a currency amount into a DTO
    pub fn amount_value(&self, value: Decimal, currency: &str) -> Result<SpelledValue> {
        let text = self.amount(value, currency)?;
        Ok(
            SpelledValue::new(value.to_string(), self.config.language.code(), text)
                .with_currency(currency.trim().to_ascii_uppercase()),
        )
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured language
    pub fn language(&self) -> Language {
        self.config.language
    }
}

// Convenience functions

/// Spell an integer in the language named by `language`
pub fn integer_to_words(value: i64, language: &str, gender: GenderGroup) -> Result<String> {
    let config = Config::builder().language(language)?.gender(gender).build()?;
    Speller::with_config(config)?.integer(value)
}

/// Spell a currency amount in the language named by `language`
pub fn decimal_to_words(
    value: Decimal,
    currency: &str,
    language: &str,
    options: &Options,
    gender: GenderGroup,
) -> Result<String> {
    let config = Config::builder()
        .language(language)?
        .options(*options)
        .gender(gender)
        .build()?;
    Speller::with_config(config)?.amount(value, currency)
}
