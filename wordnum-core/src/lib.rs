//! Number and currency spelling for eleven languages
//!
//! Each language ships an embedded table of numerals, scale words and
//! currency names plus a small rule set that adjusts a shared
//! decomposition algorithm: split the number into billion, million and
//! thousand groups, spell every group below one thousand, attach the scale
//! word in the right plural form.
//!
//! # Example
//!
//! ```rust
//! use wordnum_core::{converter, Decimal, GenderGroup, Language, Options};
//!
//! let english = converter(Language::English).unwrap();
//! assert_eq!(english.to_words(1234).unwrap(), "one thousand two hundred thirty-four");
//!
//! let russian = converter(Language::Russian).unwrap();
//! let text = russian
//!     .currency_to_words(Decimal::new(2150, 2), "RUB", &Options::default(), GenderGroup::None)
//!     .unwrap();
//! assert_eq!(text, "двадцать один рубль пятьдесят копеек");
//! ```

pub mod error;
pub mod language;
pub mod types;

pub use error::{Error, Result};
pub use language::{
    converter, converter_for, supported_currencies, Language, LanguageTables, NumberConverter,
};
pub use rust_decimal::Decimal;
pub use types::{GenderGroup, Options, MAX_NUMBER};
