//! Bulgarian: "и" before the last word of a group, and between the scale
//! groups and a closing part that has none ("хиляда и един", "две хиляди и сто")

use super::append_tabled_hundreds;
use crate::language::base::{self, push_word};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

const CONJUNCTION: &str = "и";

/// Bulgarian number converter
#[derive(Debug)]
pub struct BulgarianConverter {
    tables: LanguageTables,
}

impl BulgarianConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

impl NumberConverter for BulgarianConverter {
    fn language(&self) -> Language {
        Language::Bulgarian
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_number(&self, num: u64, gender: GenderGroup, buf: &mut String) {
        let mut parts = Vec::new();
        let mut rest = num;
        for scale in self.tables.scales.values() {
            let mut part = String::new();
            rest = self.append_scale(rest, scale, gender, &mut part);
            if !part.is_empty() {
                parts.push(part);
            }
        }
        let mut part = String::new();
        self.append_less_than_one_thousand(rest, gender, &mut part);
        if !part.is_empty() {
            parts.push(part);
        }

        let Some((last, init)) = parts.split_last() else {
            return;
        };
        for part in init {
            buf.push_str(part);
        }
        if !init.is_empty() && !last.split_whitespace().any(|word| word == CONJUNCTION) {
            push_word(buf, CONJUNCTION);
        }
        buf.push_str(last);
    }

    fn omits_leading_one(&self, scale: u64) -> bool {
        scale == 1_000
    }

    fn append_less_than_one_thousand(&self, num: u64, gender: GenderGroup, buf: &mut String) {
        let mut group = String::new();
        base::append_less_than_one_thousand(self, num, gender, &mut group);

        let words: Vec<&str> = group.split_whitespace().collect();
        if let Some((last, init)) = words.split_last().filter(|(_, init)| !init.is_empty()) {
            for word in init {
                push_word(buf, word);
            }
            push_word(buf, CONJUNCTION);
            push_word(buf, last);
        } else {
            buf.push_str(&group);
        }
    }

    fn append_hundreds(&self, num: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        append_tabled_hundreds(&self.tables.numerals, num, buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::language::registry::converter;
    use crate::language::supported::Language;

    #[test]
    fn test_bulgarian_conjunction() {
        let bulgarian = converter(Language::Bulgarian).unwrap();
        assert_eq!(bulgarian.to_words(21).unwrap(), "двадесет и един");
        assert_eq!(bulgarian.to_words(105).unwrap(), "сто и пет");
        assert_eq!(bulgarian.to_words(125).unwrap(), "сто двадесет и пет");
        assert_eq!(bulgarian.to_words(20).unwrap(), "двадесет");
    }

    #[test]
    fn test_bulgarian_thousands() {
        let bulgarian = converter(Language::Bulgarian).unwrap();
        assert_eq!(bulgarian.to_words(1_000).unwrap(), "хиляда");
        assert_eq!(bulgarian.to_words(2_000).unwrap(), "две хиляди");
        assert_eq!(
            bulgarian.to_words(21_000).unwrap(),
            "двадесет и една хиляди"
        );
        assert_eq!(bulgarian.to_words(2_000_000).unwrap(), "два милиона");
    }

    #[test]
    fn test_bulgarian_conjunction_after_scales() {
        let bulgarian = converter(Language::Bulgarian).unwrap();
        for (num, expected) in [
            (1_001, "хиляда и един"),
            (2_100, "две хиляди и сто"),
            (1_080, "хиляда и осемдесет"),
            (1_125, "хиляда сто двадесет и пет"),
            (3_021, "три хиляди двадесет и един"),
            (2_000_005, "два милиона и пет"),
            (1_002_000, "един милион и две хиляди"),
        ] {
            assert_eq!(bulgarian.to_words(num).unwrap(), expected, "{num}");
        }
    }
}
