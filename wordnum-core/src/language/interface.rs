//! Public contract for number converters
//!
//! A converter owns one language's immutable tables and exposes the shared
//! decomposition algorithm through overridable hooks. Every hook has a
//! default body in [`crate::language::base`]; a language overrides only the
//! hooks where its grammar departs from the generic pattern.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::language::base;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;
use crate::types::{GenderGroup, Options};

/// Number-to-words converter for a single language
///
/// Hooks append to a caller-owned buffer and return the part of the number
/// they did not consume. Words are followed by a separator (a space, or a
/// joiner such as `-` for compounds); the entry points trim the result.
pub trait NumberConverter: Send + Sync + 'static {
    /// Language this converter spells
    fn language(&self) -> Language;

    /// Numeral, scale and currency tables
    fn tables(&self) -> &LanguageTables;

    // --- Entry points ---

    /// Spell a whole number with standalone forms
    fn to_words(&self, num: u64) -> Result<String> {
        self.to_words_with_gender(num, GenderGroup::None)
    }

    /// Spell a whole number agreeing with `gender`
    fn to_words_with_gender(&self, num: u64, gender: GenderGroup) -> Result<String> {
        base::spell(self, num, gender)
    }

    /// Spell a currency amount
    ///
    /// `gender` overrides the main unit's own gender when it is not
    /// [`GenderGroup::None`]; the sub-unit always uses its own gender.
    fn currency_to_words(
        &self,
        amount: Decimal,
        currency: &str,
        options: &Options,
        gender: GenderGroup,
    ) -> Result<String> {
        base::spell_amount(self, amount, currency, options, gender)
    }

    // --- Decomposition hooks ---

    /// Drive all scale groups and the final remainder
    fn append_number(&self, num: u64, gender: GenderGroup, buf: &mut String) {
        base::append_number(self, num, gender, buf)
    }

    /// Compose one scale group ("<count> <scale word>")
    fn append_scale(&self, num: u64, scale: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        base::append_scale(self, num, scale, gender, buf)
    }

    /// Whether a count of exactly one is left unspoken before `scale`
    fn omits_leading_one(&self, _scale: u64) -> bool {
        false
    }

    /// Compose a group below one thousand
    fn append_less_than_one_thousand(&self, num: u64, gender: GenderGroup, buf: &mut String) {
        base::append_less_than_one_thousand(self, num, gender, buf)
    }

    /// Compose the hundreds of a group
    fn append_hundreds(&self, num: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        base::append_hundreds(self, num, gender, buf)
    }

    /// Compose the tens of a group
    fn append_tens(&self, num: u64, gender: GenderGroup, buf: &mut String) -> u64 {
        base::append_tens(self, num, gender, buf)
    }

    /// Emit whatever is left as a single table word
    fn append_units(&self, num: u64, gender: GenderGroup, buf: &mut String) {
        base::append_units(self, num, gender, buf)
    }

    // --- Form selection ---

    /// Numeral table column for `gender`
    fn unit_form(&self, gender: GenderGroup) -> usize {
        match gender {
            GenderGroup::None | GenderGroup::Masculine => 0,
            GenderGroup::Feminine => 1,
            GenderGroup::Neuter => 2,
        }
    }

    /// Noun form column after a count (scale words and currency names)
    fn plural_form(&self, count: u64) -> usize {
        if count == 1 {
            0
        } else {
            1
        }
    }

    /// Text placed between a count and the currency name after it
    fn currency_joiner(&self, _count: u64, _name: &str) -> &'static str {
        " "
    }

    /// Capitalise the first letter of `text`
    fn upper_first(&self, text: &str) -> String {
        base::upper_first(text)
    }
}
