//! Russian, Ukrainian and Belarusian
//!
//! The three share one grammar: hundreds are single words, 1 and 2 agree in
//! gender with the counted noun, and nouns take one of three plural forms.

use super::{append_tabled_hundreds, east_slavic_plural_form};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// Converter for the East Slavic languages
#[derive(Debug)]
pub struct EastSlavicConverter {
    language: Language,
    tables: LanguageTables,
}

impl EastSlavicConverter {
    pub fn new(language: Language, tables: LanguageTables) -> Self {
        debug_assert!(matches!(
            language,
            Language::Russian | Language::Ukrainian | Language::Belarusian
        ));
        Self { language, tables }
    }
}

impl NumberConverter for EastSlavicConverter {
    fn language(&self) -> Language {
        self.language
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_hundreds(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        append_tabled_hundreds(&self.tables.numerals, num, buf)
    }

    fn plural_form(&self, count: u64) -> usize {
        east_slavic_plural_form(count)
    }
}
