//! Scale words (thousand, million, billion)

use super::WordForms;
use crate::types::GenderGroup;

/// A scale noun and its grammatical gender
#[derive(Debug, Clone)]
pub struct ScaleWord {
    pub forms: WordForms,
    /// Gender the counting numeral must agree with
    pub gender: GenderGroup,
}

/// Scale table ordered from the largest scale to the smallest
#[derive(Debug, Clone)]
pub struct ScaleTable {
    scales: Vec<(u64, ScaleWord)>,
}

impl ScaleTable {
    /// Create from parsed entries in any order
    pub fn new(entries: impl IntoIterator<Item = (u64, ScaleWord)>) -> Self {
        let mut scales: Vec<_> = entries.into_iter().collect();
        scales.sort_by(|a, b| b.0.cmp(&a.0));
        scales.dedup_by_key(|(value, _)| *value);
        Self { scales }
    }

    /// Scale values, largest first
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.scales.iter().map(|(value, _)| *value)
    }

    /// Look up a scale word
    #[inline]
    pub fn get(&self, scale: u64) -> Option<&ScaleWord> {
        self.scales
            .iter()
            .find(|(value, _)| *value == scale)
            .map(|(_, word)| word)
    }

    /// Largest scale value
    pub fn largest(&self) -> Option<u64> {
        self.scales.first().map(|(value, _)| *value)
    }
}
