//! High-level configuration API

use crate::error::{ApiError, Result};
use wordnum_core::{GenderGroup, Language, Options};

/// Settings applied to every call of a [`crate::Speller`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Language to spell in
    pub language: Language,
    /// Currency rendering toggles
    pub options: Options,
    /// Gender agreement for spelled numbers
    pub gender: GenderGroup,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    missing_language: bool,
}

impl ConfigBuilder {
    /// Set the language by name, ISO code or culture tag
    ///
    /// Unknown keys are rejected here; an empty key is rejected by
    /// [`ConfigBuilder::build`].
    pub fn language(mut self, key: impl AsRef<str>) -> Result<Self> {
        let key = key.as_ref();
        if key.trim().is_empty() {
            self.missing_language = true;
            return Ok(self);
        }
        self.config.language = Language::from_key(key)?;
        self.missing_language = false;
        Ok(self)
    }

    /// Set the language directly
    pub fn language_id(mut self, language: Language) -> Self {
        self.config.language = language;
        self.missing_language = false;
        self
    }

    /// Set gender agreement
    pub fn gender(mut self, gender: GenderGroup) -> Self {
        self.config.gender = gender;
        self
    }

    /// Replace all currency options
    pub fn options(mut self, options: Options) -> Self {
        self.config.options = options;
        self
    }

    /// Capitalise the main-unit part of amounts
    pub fn main_unit_first_char_upper(mut self, enabled: bool) -> Self {
        self.config.options.main_unit_first_char_upper = enabled;
        self
    }

    /// Capitalise the sub-unit part of amounts
    pub fn sub_unit_first_char_upper(mut self, enabled: bool) -> Self {
        self.config.options.sub_unit_first_char_upper = enabled;
        self
    }

    /// Spell a zero main part
    pub fn main_unit_zero_enabled(mut self, enabled: bool) -> Self {
        self.config.options.main_unit_zero_enabled = enabled;
        self
    }

    /// Spell a zero sub-unit part
    pub fn sub_unit_zero_enabled(mut self, enabled: bool) -> Self {
        self.config.options.sub_unit_zero_enabled = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.missing_language {
            return Err(ApiError::Config("language required".to_string()));
        }
        Ok(self.config)
    }
}
