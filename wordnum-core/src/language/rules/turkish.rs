//! Turkish: composed teens, bare "yüz" and "bin", no plural nouns

use crate::language::base::{self, push_word};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// Turkish number converter
#[derive(Debug)]
pub struct TurkishConverter {
    tables: LanguageTables,
}

impl TurkishConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

impl NumberConverter for TurkishConverter {
    fn language(&self) -> Language {
        Language::Turkish
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn omits_leading_one(&self, scale: u64) -> bool {
        scale == 1_000
    }

    fn append_hundreds(&self, num: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        if (100..200).contains(&num) {
            push_word(buf, self.tables.numerals.word(100, 0));
            return num - 100;
        }
        base::append_hundreds(self, num, gender, buf)
    }

    fn append_tens(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        if num < 10 {
            return num;
        }

        let tens = num / 10 * 10;
        push_word(buf, self.tables.numerals.word(tens, 0));
        num - tens
    }

    fn plural_form(&self, _count: u64) -> usize {
        0
    }

    fn upper_first(&self, text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some('i') => std::iter::once('İ').chain(chars).collect(),
            Some('ı') => std::iter::once('I').chain(chars).collect(),
            _ => base::upper_first(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::language::registry::converter;
    use crate::language::supported::Language;

    #[test]
    fn test_turkish_numbers() {
        let turkish = converter(Language::Turkish).unwrap();
        assert_eq!(turkish.to_words(11).unwrap(), "on bir");
        assert_eq!(turkish.to_words(100).unwrap(), "yüz");
        assert_eq!(turkish.to_words(1_000).unwrap(), "bin");
        assert_eq!(turkish.to_words(2_345).unwrap(), "iki bin üç yüz kırk beş");
    }

    #[test]
    fn test_turkish_dotted_capital() {
        let turkish = converter(Language::Turkish).unwrap();
        assert_eq!(turkish.upper_first("iki lira"), "İki lira");
        assert_eq!(turkish.upper_first("ılık"), "Ilık");
        assert_eq!(turkish.upper_first("beş"), "Beş");
    }
}
