//! Currency naming models

use std::collections::BTreeMap;

use super::WordForms;
use crate::types::GenderGroup;

/// Naming of a minor denomination (cent, kopeck, ...)
#[derive(Debug, Clone)]
pub struct SubUnitModel {
    pub names: WordForms,
    pub gender: GenderGroup,
}

/// Naming of one currency in one language
#[derive(Debug, Clone)]
pub struct CurrencyModel {
    /// ISO 4217 code, upper case
    pub code: String,
    pub names: WordForms,
    pub gender: GenderGroup,
    pub sub_unit: SubUnitModel,
}

/// Currency models keyed by upper-case code
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    models: BTreeMap<String, CurrencyModel>,
}

impl CurrencyTable {
    /// Create from models
    pub fn new(models: impl IntoIterator<Item = CurrencyModel>) -> Self {
        Self {
            models: models
                .into_iter()
                .map(|model| (model.code.clone(), model))
                .collect(),
        }
    }

    /// Look up a currency, ignoring ASCII case
    pub fn get(&self, code: &str) -> Option<&CurrencyModel> {
        self.models.get(&code.trim().to_ascii_uppercase())
    }

    /// Supported codes in alphabetical order
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.models.keys().map(String::as_str)
    }
}
