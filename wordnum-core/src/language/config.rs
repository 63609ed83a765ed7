//! Configuration structures and validation
//!
//! This module defines the TOML schema for language tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::GenderGroup;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    /// Numeral key (as written in TOML) to its word forms
    pub numerals: BTreeMap<String, Vec<String>>,
    /// Scale value (as written in TOML) to its word forms
    pub scales: BTreeMap<String, ScaleEntry>,
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyEntry>,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Scale word configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub forms: Vec<String>,
    #[serde(default)]
    pub gender: GenderGroup,
}

/// Currency configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyEntry {
    pub names: Vec<String>,
    #[serde(default)]
    pub gender: GenderGroup,
    pub sub_unit: SubUnitEntry,
}

/// Sub-unit (minor denomination) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubUnitEntry {
    pub names: Vec<String>,
    #[serde(default)]
    pub gender: GenderGroup,
}

/// Numerals every language must define
const REQUIRED_NUMERALS: [u64; 11] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 100];

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        for (key, forms) in &self.numerals {
            parse_key(key)?;
            check_forms(forms, &format!("numeral {key}"))?;
        }

        for required in REQUIRED_NUMERALS {
            if !self.numerals.contains_key(&required.to_string()) {
                return Err(format!("missing numeral {required}"));
            }
        }

        if self.scales.is_empty() {
            return Err("no scale words defined".to_string());
        }

        for (key, scale) in &self.scales {
            let value = parse_key(key)?;
            if !is_power_of_thousand(value) {
                return Err(format!("scale {key} is not a power of 1000"));
            }
            check_forms(&scale.forms, &format!("scale {key}"))?;
        }

        for (code, currency) in &self.currencies {
            check_forms(&currency.names, &format!("currency {code}"))?;
            check_forms(&currency.sub_unit.names, &format!("sub-unit of {code}"))?;
        }

        Ok(())
    }
}

/// Parse a numeric table key
pub(crate) fn parse_key(key: &str) -> Result<u64, String> {
    key.trim()
        .parse::<u64>()
        .map_err(|_| format!("'{key}' is not a numeric key"))
}

fn check_forms(forms: &[String], what: &str) -> Result<(), String> {
    if forms.is_empty() {
        return Err(format!("{what} has no word forms"));
    }
    if forms.iter().any(|form| form.trim().is_empty()) {
        return Err(format!("{what} has an empty word form"));
    }
    Ok(())
}

fn is_power_of_thousand(mut value: u64) -> bool {
    if value < 1000 {
        return false;
    }
    while value % 1000 == 0 {
        value /= 1000;
    }
    value == 1
}
