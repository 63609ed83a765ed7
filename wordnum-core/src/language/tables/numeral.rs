//! Numeral word lookup

use std::collections::HashMap;

use super::WordForms;

/// Numeral table: small integer key to its word forms
#[derive(Debug, Clone)]
pub struct NumeralTable {
    words: HashMap<u64, WordForms>,
}

impl NumeralTable {
    /// Create from parsed entries
    pub fn new(entries: impl IntoIterator<Item = (u64, Vec<String>)>) -> Self {
        Self {
            words: entries
                .into_iter()
                .map(|(key, forms)| (key, WordForms::new(forms)))
                .collect(),
        }
    }

    /// Word for `num` in column `form`
    ///
    /// Tables are checked for completeness when they are built and in tests,
    /// so a miss means a rule asked for a key its language never defines.
    #[inline]
    pub fn word(&self, num: u64, form: usize) -> &str {
        match self.words.get(&num) {
            Some(forms) => forms.get(form),
            None => {
                // Every key 0-999 is reached by the exhaustive per-language test.
                debug_assert!(false, "numeral {num} missing from table");
                ""
            }
        }
    }

    /// Whether `num` has an entry
    pub fn contains(&self, num: u64) -> bool {
        self.words.contains_key(&num)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
