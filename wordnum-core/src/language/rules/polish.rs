//! Polish: scale words stand alone for one, singular only for exactly one
//!
//! Only a standalone 1 agrees in gender. Compounds ending in one ("dwadzieścia
//! jeden", "sto jeden") keep the masculine form whatever they count.

use super::{append_tabled_hundreds, polish_plural_form};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// Polish number converter
#[derive(Debug)]
pub struct PolishConverter {
    tables: LanguageTables,
}

impl PolishConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

impl NumberConverter for PolishConverter {
    fn language(&self) -> Language {
        Language::Polish
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_number(&self, num: u64, gender: GenderGroup, buf: &mut String) {
        let mut rest = num;
        for scale in self.tables.scales.values() {
            rest = self.append_scale(rest, scale, gender, buf);
        }

        let gender = if num != 1 && rest % 10 == 1 {
            GenderGroup::Masculine
        } else {
            gender
        };
        self.append_less_than_one_thousand(rest, gender, buf);
    }

    fn omits_leading_one(&self, _scale: u64) -> bool {
        true
    }

    fn append_hundreds(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        append_tabled_hundreds(&self.tables.numerals, num, buf)
    }

    fn plural_form(&self, count: u64) -> usize {
        polish_plural_form(count)
    }
}
