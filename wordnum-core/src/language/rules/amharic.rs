//! Amharic: 11-19 spelled with the bound form of ten

use crate::language::base::{self, push_word};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// Amharic number converter
#[derive(Debug)]
pub struct AmharicConverter {
    tables: LanguageTables,
}

impl AmharicConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

impl NumberConverter for AmharicConverter {
    fn language(&self) -> Language {
        Language::Amharic
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_tens(&self, num: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        if (11..20).contains(&num) {
            push_word(buf, self.tables.numerals.word(10, 1));
            return num - 10;
        }
        base::append_tens(self, num, gender, buf)
    }

    fn plural_form(&self, _count: u64) -> usize {
        0
    }
}
