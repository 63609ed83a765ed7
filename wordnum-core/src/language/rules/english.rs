//! English: hyphenated tens compounds

use crate::language::base::{push_joined, push_word};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// English number converter
#[derive(Debug)]
pub struct EnglishConverter {
    tables: LanguageTables,
}

impl EnglishConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

impl NumberConverter for EnglishConverter {
    fn language(&self) -> Language {
        Language::English
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_tens(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        if num <= 20 {
            return num;
        }

        let tens = num / 10 * 10;
        let word = self.tables.numerals.word(tens, 0);
        if num == tens {
            push_word(buf, word);
        } else {
            push_joined(buf, word, '-');
        }
        num - tens
    }
}
