//! Per-language rule sets
//!
//! Every converter owns its [`LanguageTables`] and overrides only the hooks
//! where the language departs from the shared algorithm.

mod amharic;
mod bulgarian;
mod east_slavic;
mod english;
mod french;
mod latvian;
mod polish;
mod spanish;
mod turkish;

pub use amharic::AmharicConverter;
pub use bulgarian::BulgarianConverter;
pub use east_slavic::EastSlavicConverter;
pub use english::EnglishConverter;
pub use french::FrenchConverter;
pub use latvian::LatvianConverter;
pub use polish::PolishConverter;
pub use spanish::SpanishConverter;
pub use turkish::TurkishConverter;

use std::sync::Arc;

use crate::language::base::push_word;
use crate::language::interface::NumberConverter;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::language::tables::NumeralTable;

/// Wrap a language's tables in its rule set
pub fn for_language(language: Language, tables: LanguageTables) -> Arc<dyn NumberConverter> {
    match language {
        Language::English => Arc::new(EnglishConverter::new(tables)),
        Language::French => Arc::new(FrenchConverter::new(tables)),
        Language::Spanish => Arc::new(SpanishConverter::new(tables)),
        Language::Turkish => Arc::new(TurkishConverter::new(tables)),
        Language::Amharic => Arc::new(AmharicConverter::new(tables)),
        Language::Latvian => Arc::new(LatvianConverter::new(tables)),
        Language::Bulgarian => Arc::new(BulgarianConverter::new(tables)),
        Language::Polish => Arc::new(PolishConverter::new(tables)),
        Language::Russian | Language::Ukrainian | Language::Belarusian => {
            Arc::new(EastSlavicConverter::new(language, tables))
        }
    }
}

/// Hundreds spelled with one table word per multiple ("двести", "dwieście")
pub(crate) fn append_tabled_hundreds(numerals: &NumeralTable, num: u64, buf: &mut String) -> u64 {
    if num < 100 {
        return num;
    }

    let hundreds = num / 100 * 100;
    push_word(buf, numerals.word(hundreds, 0));
    num - hundreds
}

/// One / few / many selection shared by Russian, Ukrainian and Belarusian
pub(crate) fn east_slavic_plural_form(count: u64) -> usize {
    let last = count % 10;
    let last_two = count % 100;
    if last == 1 && last_two != 11 {
        0
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        1
    } else {
        2
    }
}

/// Polish keeps the singular for exactly one
pub(crate) fn polish_plural_form(count: u64) -> usize {
    if count == 1 {
        0
    } else {
        match east_slavic_plural_form(count) {
            1 => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_east_slavic_plural_form() {
        for (count, form) in [
            (1, 0),
            (21, 0),
            (101, 0),
            (11, 2),
            (111, 2),
            (2, 1),
            (24, 1),
            (12, 2),
            (14, 2),
            (5, 2),
            (0, 2),
            (1000, 2),
        ] {
            assert_eq!(east_slavic_plural_form(count), form, "count {count}");
        }
    }

    #[test]
    fn test_polish_plural_form() {
        assert_eq!(polish_plural_form(1), 0);
        assert_eq!(polish_plural_form(21), 2);
        assert_eq!(polish_plural_form(22), 1);
        assert_eq!(polish_plural_form(13), 2);
        assert_eq!(polish_plural_form(0), 2);
    }

    #[test]
    fn test_tabled_hundreds() {
        let numerals = NumeralTable::new([
            (200, vec!["двести".to_string()]),
            (100, vec!["сто".to_string()]),
        ]);
        let mut buf = String::new();
        assert_eq!(append_tabled_hundreds(&numerals, 215, &mut buf), 15);
        assert_eq!(buf, "двести ");
        assert_eq!(append_tabled_hundreds(&numerals, 99, &mut buf), 99);
        assert_eq!(buf, "двести ");
    }
}
