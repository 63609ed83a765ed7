//! Runtime tables built from a language configuration
//!
//! This module bridges the TOML schema and the lookup tables the
//! converters read while spelling numbers.

use crate::error::{Error, Result};
use crate::language::config::{parse_key, LanguageConfig};
use crate::language::tables::*;

/// Immutable numeral, scale and currency tables of one language
#[derive(Debug, Clone)]
pub struct LanguageTables {
    code: String,
    name: String,
    pub numerals: NumeralTable,
    pub scales: ScaleTable,
    pub currencies: CurrencyTable,
}

impl LanguageTables {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidTable {
            language: config.metadata.code.clone(),
            reason,
        };

        // Validate configuration
        config.validate().map_err(invalid)?;

        // Build numeral table
        let numerals = config
            .numerals
            .iter()
            .map(|(key, forms)| -> std::result::Result<_, String> {
                Ok((parse_key(key)?, forms.clone()))
            })
            .collect::<std::result::Result<Vec<_>, String>>()
            .map_err(invalid)?;
        let numerals = NumeralTable::new(numerals);

        // Build scale table
        let scales = config
            .scales
            .iter()
            .map(|(key, entry)| -> std::result::Result<_, String> {
                Ok((
                    parse_key(key)?,
                    ScaleWord {
                        forms: WordForms::new(entry.forms.clone()),
                        gender: entry.gender,
                    },
                ))
            })
            .collect::<std::result::Result<Vec<_>, String>>()
            .map_err(invalid)?;
        let scales = ScaleTable::new(scales);

        // Build currency table
        let currencies = CurrencyTable::new(config.currencies.iter().map(|(code, entry)| {
            CurrencyModel {
                code: code.trim().to_ascii_uppercase(),
                names: WordForms::new(entry.names.clone()),
                gender: entry.gender,
                sub_unit: SubUnitModel {
                    names: WordForms::new(entry.sub_unit.names.clone()),
                    gender: entry.sub_unit.gender,
                },
            }
        }));

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            numerals,
            scales,
            currencies,
        })
    }

    /// Parse and build from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(source).map_err(|e| Error::InvalidTable {
            language: "<unparsed>".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_config(&config)
    }

    /// Language code recorded in the table metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language name recorded in the table metadata
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenderGroup;

    const SOURCE: &str = r#"
        [metadata]
        code = "xx"
        name = "Test"

        [numerals]
        0 = ["zero"]
        1 = ["one", "une"]
        2 = ["two"]
        3 = ["three"]
        4 = ["four"]
        5 = ["five"]
        6 = ["six"]
        7 = ["seven"]
        8 = ["eight"]
        9 = ["nine"]
        100 = ["hundred"]

        [scales]
        1000 = { forms = ["thousand"], gender = "feminine" }
        1000000 = { forms = ["million"] }

        [currencies.usd]
        names = ["dollar", "dollars"]
        gender = "masculine"
        sub_unit = { names = ["cent", "cents"], gender = "masculine" }
    "#;

    #[test]
    fn test_tables_from_toml() {
        let tables = LanguageTables::from_toml_str(SOURCE).unwrap();
        assert_eq!(tables.code(), "xx");
        assert_eq!(tables.name(), "Test");
        assert_eq!(tables.numerals.word(1, 1), "une");
        assert_eq!(
            tables.scales.values().collect::<Vec<_>>(),
            vec![1_000_000, 1_000]
        );
        assert_eq!(
            tables.scales.get(1_000).unwrap().gender,
            GenderGroup::Feminine
        );
        // Codes are normalised to upper case
        let usd = tables.currencies.get("USD").unwrap();
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.sub_unit.names.get(1), "cents");
    }

    #[test]
    fn test_invalid_toml_reported() {
        let err = LanguageTables::from_toml_str("[metadata").unwrap_err();
        assert!(matches!(err, Error::InvalidTable { .. }));
    }

    #[test]
    fn test_validation_error_carries_language_code() {
        let source = SOURCE.replace("100 = [\"hundred\"]", "");
        match LanguageTables::from_toml_str(&source).unwrap_err() {
            Error::InvalidTable { language, reason } => {
                assert_eq!(language, "xx");
                assert_eq!(reason, "missing numeral 100");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
