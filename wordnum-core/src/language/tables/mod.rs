//! Runtime tables for language rules
//!
//! Built once from a validated configuration; lookups never allocate.

pub mod currency;
pub mod forms;
pub mod numeral;
pub mod scale;

pub use currency::{CurrencyModel, CurrencyTable, SubUnitModel};
pub use forms::WordForms;
pub use numeral::NumeralTable;
pub use scale::{ScaleTable, ScaleWord};
