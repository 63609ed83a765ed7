//! Language tables and number converters
//!
//! Each language is described by an embedded TOML table (numerals, scale
//! words, currency names) and a small rule set that overrides the shared
//! decomposition hooks where its grammar needs it.

pub mod base;
pub mod config;
pub mod interface;
pub mod registry;
pub mod rules;
pub mod runtime;
pub mod supported;
pub mod tables;

pub use interface::NumberConverter;
pub use registry::{converter, converter_for, supported_currencies};
pub use runtime::LanguageTables;
pub use supported::Language;
