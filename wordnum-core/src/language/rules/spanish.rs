//! Spanish: gender agreement, apocope and the long scale
//!
//! Numeral columns are standalone, feminine and apocopated masculine, so a
//! bare count reads "veintiuno" while a counted noun reads "veintiún
//! euros". Thousands of millions are counted with "mil millones" instead of
//! a billion word.

use crate::language::base::push_word;
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Spanish number converter
#[derive(Debug)]
pub struct SpanishConverter {
    tables: LanguageTables,
}

impl SpanishConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }

    /// "<count> mil" with the count agreeing with the counted noun
    fn append_thousands(&self, num: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        let Some(word) = self.tables.scales.get(THOUSAND) else {
            return num;
        };
        if num < THOUSAND {
            return num;
        }

        let base = num / THOUSAND;
        if base != 1 || !self.omits_leading_one(THOUSAND) {
            self.append_less_than_one_thousand(base, gender.or(word.gender), buf);
        }
        push_word(buf, word.forms.get(self.plural_form(base)));
        num - base * THOUSAND
    }

    /// Up to 999 999 millions
    fn append_millions(&self, num: u64, buf: &mut String) -> u64 {
        let Some(word) = self.tables.scales.get(MILLION) else {
            return num;
        };
        if num < MILLION {
            return num;
        }

        let base = num / MILLION;
        let rest = self.append_thousands(base, word.gender, buf);
        self.append_less_than_one_thousand(rest, word.gender, buf);
        push_word(buf, word.forms.get(self.plural_form(base)));
        num - base * MILLION
    }
}

impl NumberConverter for SpanishConverter {
    fn language(&self) -> Language {
        Language::Spanish
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_scale(&self, num: u64, scale: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        match scale {
            MILLION => self.append_millions(num, buf),
            THOUSAND => self.append_thousands(num, gender, buf),
            _ => num,
        }
    }

    fn omits_leading_one(&self, scale: u64) -> bool {
        scale == THOUSAND
    }

    fn append_hundreds(&self, num: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        if num < 100 {
            return num;
        }

        let numerals = &self.tables.numerals;
        let hundreds = num / 100;
        let rest = num - hundreds * 100;
        if hundreds == 1 {
            // "cien" alone, "ciento" when more follows
            push_word(buf, numerals.word(100, usize::from(rest != 0)));
        } else {
            let form = usize::from(gender == GenderGroup::Feminine);
            push_word(buf, numerals.word(hundreds * 100, form));
        }
        rest
    }

    fn append_tens(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        if num < 30 {
            return num;
        }

        let tens = num / 10 * 10;
        push_word(buf, self.tables.numerals.word(tens, 0));
        if num > tens {
            push_word(buf, "y");
        }
        num - tens
    }

    fn currency_joiner(&self, count: u64, _name: &str) -> &'static str {
        if count > 0 && count % MILLION == 0 {
            " de "
        } else {
            " "
        }
    }

    fn unit_form(&self, gender: GenderGroup) -> usize {
        match gender {
            GenderGroup::None | GenderGroup::Neuter => 0,
            GenderGroup::Feminine => 1,
            GenderGroup::Masculine => 2,
        }
    }
}
