//! Value types shared by every converter

use serde::{Deserialize, Serialize};

/// Largest value the scale tables can express (no trillion scale exists)
pub const MAX_NUMBER: u64 = 999_999_999_999;

/// Grammatical gender used to pick numeral forms
///
/// Only gender-marking languages consult it; the others ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderGroup {
    /// No agreement requested; standalone forms are used
    #[default]
    None,
    /// Masculine agreement
    Masculine,
    /// Feminine agreement
    Feminine,
    /// Neuter agreement
    Neuter,
}

impl GenderGroup {
    /// Returns `other` when no gender was requested
    pub fn or(self, other: GenderGroup) -> GenderGroup {
        match self {
            GenderGroup::None => other,
            gender => gender,
        }
    }
}

/// Rendering toggles for currency amounts
///
/// Read-only for the duration of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Capitalise the first letter of the main-unit part
    pub main_unit_first_char_upper: bool,
    /// Capitalise the first letter of the sub-unit part
    pub sub_unit_first_char_upper: bool,
    /// Spell "zero <units>" when the integer part is zero
    pub main_unit_zero_enabled: bool,
    /// Spell "zero <sub-units>" when the fraction is zero
    pub sub_unit_zero_enabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            main_unit_first_char_upper: false,
            sub_unit_first_char_upper: false,
            main_unit_zero_enabled: true,
            sub_unit_zero_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_or_prefers_explicit() {
        assert_eq!(
            GenderGroup::Feminine.or(GenderGroup::Masculine),
            GenderGroup::Feminine
        );
        assert_eq!(
            GenderGroup::None.or(GenderGroup::Masculine),
            GenderGroup::Masculine
        );
    }

    #[test]
    fn test_options_defaults() {
        let options = Options::default();
        assert!(options.main_unit_zero_enabled);
        assert!(!options.sub_unit_zero_enabled);
        assert!(!options.main_unit_first_char_upper);
        assert!(!options.sub_unit_first_char_upper);
    }

    #[test]
    fn test_gender_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            gender: GenderGroup,
        }
        let parsed: Wrapper = toml::from_str("gender = \"feminine\"").unwrap();
        assert_eq!(parsed.gender, GenderGroup::Feminine);
    }
}
