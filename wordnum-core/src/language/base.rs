//! Shared decomposition algorithm
//!
//! These functions are the default bodies of the [`NumberConverter`] hooks.
//! They are free functions so that a language overriding a hook can still
//! fall back to the shared behaviour for the cases it does not change.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::language::interface::NumberConverter;
use crate::language::tables::WordForms;
use crate::types::{GenderGroup, Options, MAX_NUMBER};

/// Append a word followed by a space
#[inline]
pub fn push_word(buf: &mut String, word: &str) {
    buf.push_str(word);
    buf.push(' ');
}

/// Append a word followed by a compound joiner such as `-`
#[inline]
pub fn push_joined(buf: &mut String, word: &str, joiner: char) {
    buf.push_str(word);
    buf.push(joiner);
}

/// Spell a whole number
pub fn spell<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    gender: GenderGroup,
) -> Result<String> {
    if num > MAX_NUMBER {
        return Err(Error::OutOfRange {
            value: num.to_string(),
        });
    }

    if num == 0 {
        return Ok(converter.tables().numerals.word(0, 0).to_string());
    }

    let mut buf = String::with_capacity(64);
    converter.append_number(num, gender, &mut buf);
    Ok(buf.trim().to_string())
}

/// Walk the scale groups from the largest down, then the remainder
pub fn append_number<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    gender: GenderGroup,
    buf: &mut String,
) {
    let mut num = num;
    for scale in converter.tables().scales.values() {
        num = converter.append_scale(num, scale, gender, buf);
    }
    converter.append_less_than_one_thousand(num, gender, buf);
}

/// Emit one scale group and return what is left below it
pub fn append_scale<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    scale: u64,
    _gender: GenderGroup,
    buf: &mut String,
) -> u64 {
    let Some(word) = converter.tables().scales.get(scale) else {
        return num;
    };
    if num < scale {
        return num;
    }

    let base = num / scale;
    if base != 1 || !converter.omits_leading_one(scale) {
        converter.append_less_than_one_thousand(base, word.gender, buf);
    }
    push_word(buf, word.forms.get(converter.plural_form(base)));

    num - base * scale
}

/// Hundreds, then tens, then units
pub fn append_less_than_one_thousand<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    gender: GenderGroup,
    buf: &mut String,
) {
    let num = converter.append_hundreds(num, gender, buf);
    let num = converter.append_tens(num, gender, buf);
    converter.append_units(num, gender, buf);
}

/// "<count> <hundred>"
pub fn append_hundreds<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    _gender: GenderGroup,
    buf: &mut String,
) -> u64 {
    if num < 100 {
        return num;
    }

    let numerals = &converter.tables().numerals;
    let hundreds = num / 100;
    push_word(buf, numerals.word(hundreds, 0));
    push_word(buf, numerals.word(100, 0));

    num - hundreds * 100
}

/// Tens bucket word for anything above twenty
pub fn append_tens<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    _gender: GenderGroup,
    buf: &mut String,
) -> u64 {
    if num <= 20 {
        return num;
    }

    let tens = num / 10 * 10;
    push_word(buf, converter.tables().numerals.word(tens, 0));

    num - tens
}

/// Direct table lookup; zero contributes nothing
pub fn append_units<C: NumberConverter + ?Sized>(
    converter: &C,
    num: u64,
    gender: GenderGroup,
    buf: &mut String,
) {
    if num > 0 {
        push_word(
            buf,
            converter
                .tables()
                .numerals
                .word(num, converter.unit_form(gender)),
        );
    }
}

/// Spell a currency amount: main part, then sub-unit part
pub fn spell_amount<C: NumberConverter + ?Sized>(
    converter: &C,
    amount: Decimal,
    currency: &str,
    options: &Options,
    gender: GenderGroup,
) -> Result<String> {
    let model = converter
        .tables()
        .currencies
        .get(currency)
        .ok_or_else(|| Error::UnsupportedCurrency {
            language: converter.language().name(),
            currency: currency.to_string(),
        })?;

    let (main, sub) = split_amount(amount)?;
    let render_sub = sub > 0 || options.sub_unit_zero_enabled;
    let render_main = main > 0 || options.main_unit_zero_enabled || !render_sub;

    let mut parts = Vec::with_capacity(2);
    if render_main {
        let text = spell_unit(converter, main, &model.names, gender.or(model.gender))?;
        parts.push(if options.main_unit_first_char_upper {
            converter.upper_first(&text)
        } else {
            text
        });
    }
    if render_sub {
        let text = spell_unit(
            converter,
            sub,
            &model.sub_unit.names,
            model.sub_unit.gender,
        )?;
        parts.push(if options.sub_unit_first_char_upper {
            converter.upper_first(&text)
        } else {
            text
        });
    }

    Ok(parts.join(" "))
}

fn spell_unit<C: NumberConverter + ?Sized>(
    converter: &C,
    count: u64,
    names: &WordForms,
    gender: GenderGroup,
) -> Result<String> {
    let words = converter.to_words_with_gender(count, gender)?;
    let name = names.get(converter.plural_form(count));
    Ok(format!("{words}{}{name}", converter.currency_joiner(count, name)))
}

/// Split an amount into whole units and hundredths
///
/// The fraction is truncated, not rounded: `1.999` gives `(1, 99)`.
pub fn split_amount(amount: Decimal) -> Result<(u64, u64)> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::NegativeAmount(amount.to_string()));
    }

    let whole = amount.trunc();
    let main = whole
        .to_u64()
        .filter(|value| *value <= MAX_NUMBER)
        .ok_or_else(|| Error::OutOfRange {
            value: whole.to_string(),
        })?;
    let sub = ((amount - whole) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u64()
        .unwrap_or_default();

    Ok((main, sub))
}

/// Upper-case the first character
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_push_helpers() {
        let mut buf = String::new();
        push_word(&mut buf, "twenty");
        push_joined(&mut buf, "sešdesmit", '-');
        assert_eq!(buf, "twenty sešdesmit-");
    }

    #[test]
    fn test_split_amount_truncates() {
        assert_eq!(split_amount(Decimal::from_str("1.999").unwrap()).unwrap(), (1, 99));
        assert_eq!(split_amount(Decimal::from_str("12.5").unwrap()).unwrap(), (12, 50));
        assert_eq!(split_amount(Decimal::from_str("0.01").unwrap()).unwrap(), (0, 1));
        assert_eq!(split_amount(Decimal::from(7)).unwrap(), (7, 0));
    }

    #[test]
    fn test_split_amount_rejects_negative() {
        let err = split_amount(Decimal::from_str("-0.5").unwrap()).unwrap_err();
        assert_eq!(err, Error::NegativeAmount("-0.5".to_string()));
    }

    #[test]
    fn test_split_amount_accepts_negative_zero() {
        let zero = Decimal::from_str("-0.00").unwrap();
        assert_eq!(split_amount(zero).unwrap(), (0, 0));
    }

    #[test]
    fn test_split_amount_out_of_range() {
        let err = split_amount(Decimal::from(1_000_000_000_000u64)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("one dollar"), "One dollar");
        assert_eq!(upper_first("čtyři"), "Čtyři");
        assert_eq!(upper_first("ዜሮ"), "ዜሮ");
        assert_eq!(upper_first(""), "");
    }
}
