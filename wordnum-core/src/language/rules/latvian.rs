//! Latvian: irregular 70/80/90 and the "et un" style tens

use crate::language::base::{push_joined, push_word};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// Tens whose trailing one is spelled with the bound form and ends the group
const BOUND_ONE_TENS: [u64; 5] = [21, 31, 41, 51, 61];

/// Latvian number converter
#[derive(Debug)]
pub struct LatvianConverter {
    tables: LanguageTables,
}

impl LatvianConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

impl NumberConverter for LatvianConverter {
    fn language(&self) -> Language {
        Language::Latvian
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn omits_leading_one(&self, scale: u64) -> bool {
        scale == 1_000
    }

    fn append_hundreds(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        if num < 100 {
            return num;
        }

        let numerals = &self.tables.numerals;
        let hundreds = num / 100;
        if hundreds != 1 {
            push_word(buf, numerals.word(hundreds, 0));
        }
        push_word(buf, numerals.word(100, 0));
        num - hundreds * 100
    }

    fn append_tens(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        if num <= 20 {
            return num;
        }

        let numerals = &self.tables.numerals;
        if num == 80 {
            push_word(buf, numerals.word(80, 1));
            return 0;
        }

        let mut tens = num / 10 * 10;
        if tens == 70 || tens == 90 {
            // 70s and 90s are written on top of 60 and 80
            tens -= 10;
            if num - tens == 11 {
                push_word(buf, numerals.word(tens, 0));
                push_word(buf, numerals.word(11, 1));
                return 0;
            }
            push_joined(buf, numerals.word(tens, 0), '-');
        } else {
            push_word(buf, numerals.word(tens, 0));
            if BOUND_ONE_TENS.contains(&num) {
                push_word(buf, numerals.word(num - tens, 1));
                return 0;
            }
        }

        num - tens
    }
}
