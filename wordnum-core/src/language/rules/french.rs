//! French: "et un", vigesimal 70-99, agreement of "vingt" and "cent"

use crate::language::base::{push_joined, push_word};
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::GenderGroup;

/// French number converter
#[derive(Debug)]
pub struct FrenchConverter {
    tables: LanguageTables,
}

impl FrenchConverter {
    pub fn new(tables: LanguageTables) -> Self {
        Self { tables }
    }
}

/// "quatre-vingts" and "cents" lose their plural before "mille"
fn drop_plural_before_mille(group: &mut String) {
    for plural in ["vingts ", "cents "] {
        if group.ends_with(plural) {
            let keep = group.len() - 2;
            group.truncate(keep);
            group.push(' ');
            return;
        }
    }
}

impl NumberConverter for FrenchConverter {
    fn language(&self) -> Language {
        Language::French
    }

    fn tables(&self) -> &LanguageTables {
        &self.tables
    }

    fn append_scale(&self, num: u64, scale: u64, _gender: GenderGroup, buf: &mut String) -> u64 {
        let Some(word) = self.tables.scales.get(scale) else {
            return num;
        };
        if num < scale {
            return num;
        }

        let base = num / scale;
        if base != 1 || !self.omits_leading_one(scale) {
            let mut group = String::new();
            self.append_less_than_one_thousand(base, word.gender, &mut group);
            if scale == 1_000 {
                drop_plural_before_mille(&mut group);
            }
            buf.push_str(&group);
        }
        push_word(buf, word.forms.get(self.plural_form(base)));

        num - base * scale
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
        let rest = num - hundreds * 100;
        if hundreds == 1 {
            push_word(buf, numerals.word(100, 0));
        } else {
            push_word(buf, numerals.word(hundreds, 0));
            // "deux cents" but "deux cent un"
            push_word(buf, numerals.word(100, usize::from(rest == 0)));
        }
        rest
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

        let tens = num / 10 * 10;
        if tens == 70 || tens == 90 {
            let bucket = tens - 10;
            let rest = num - bucket;
            if rest == 11 && bucket == 60 {
                push_word(buf, numerals.word(bucket, 0));
                push_word(buf, numerals.word(11, 1));
                return 0;
            }
            push_joined(buf, numerals.word(bucket, 0), '-');
            return rest;
        }

        let rest = num - tens;
        if rest == 0 {
            push_word(buf, numerals.word(tens, 0));
        } else if rest == 1 && tens <= 60 {
            push_word(buf, numerals.word(tens, 0));
            push_word(buf, numerals.word(1, 1));
            return 0;
        } else {
            push_joined(buf, numerals.word(tens, 0), '-');
        }
        rest
    }

    fn currency_joiner(&self, count: u64, name: &str) -> &'static str {
        if count == 0 || count % 1_000_000 != 0 {
            " "
        } else if name.starts_with(['a', 'e', 'i', 'o', 'u', 'é']) {
            " d'"
        } else {
            " de "
        }
    }

    fn unit_form(&self, _gender: GenderGroup) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::drop_plural_before_mille;
    use crate::language::registry::converter;
    use crate::language::supported::Language;

    #[test]
    fn test_drop_plural_before_mille() {
        let mut group = "deux cents ".to_string();
        drop_plural_before_mille(&mut group);
        assert_eq!(group, "deux cent ");

        let mut group = "quatre-vingts ".to_string();
        drop_plural_before_mille(&mut group);
        assert_eq!(group, "quatre-vingt ");

        let mut group = "trois ".to_string();
        drop_plural_before_mille(&mut group);
        assert_eq!(group, "trois ");
    }

    #[test]
    fn test_french_tens() {
        let french = converter(Language::French).unwrap();
        assert_eq!(french.to_words(21).unwrap(), "vingt et un");
        assert_eq!(french.to_words(22).unwrap(), "vingt-deux");
        assert_eq!(french.to_words(71).unwrap(), "soixante et onze");
        assert_eq!(french.to_words(77).unwrap(), "soixante-dix-sept");
        assert_eq!(french.to_words(80).unwrap(), "quatre-vingts");
        assert_eq!(french.to_words(81).unwrap(), "quatre-vingt-un");
        assert_eq!(french.to_words(91).unwrap(), "quatre-vingt-onze");
    }

    #[test]
    fn test_french_hundreds_and_thousands() {
        let french = converter(Language::French).unwrap();
        assert_eq!(french.to_words(100).unwrap(), "cent");
        assert_eq!(french.to_words(200).unwrap(), "deux cents");
        assert_eq!(french.to_words(201).unwrap(), "deux cent un");
        assert_eq!(french.to_words(1_000).unwrap(), "mille");
        assert_eq!(french.to_words(200_000).unwrap(), "deux cent mille");
        assert_eq!(french.to_words(80_000).unwrap(), "quatre-vingt mille");
        assert_eq!(french.to_words(2_000_000).unwrap(), "deux millions");
        assert_eq!(
            french.to_words(200_000_000).unwrap(),
            "deux cents millions"
        );
    }

    #[test]
    fn test_french_de_after_round_millions() {
        let french = converter(Language::French).unwrap();
        assert_eq!(french.currency_joiner(1_000_000, "euros"), " d'");
        assert_eq!(french.currency_joiner(2_000_000_000, "dollars"), " de ");
        assert_eq!(french.currency_joiner(1_000_001, "euros"), " ");
        assert_eq!(french.currency_joiner(12, "euros"), " ");
    }
}
