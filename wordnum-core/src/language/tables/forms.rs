//! Ordered word forms of a single table entry

/// Word forms indexed by a language-defined column
///
/// Column meaning is chosen per language (gender, plural category, ...).
/// An index past the last column falls back to the first form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForms {
    forms: Vec<String>,
}

impl WordForms {
    /// Create from a non-empty list of forms
    pub fn new(forms: Vec<String>) -> Self {
        debug_assert!(!forms.is_empty(), "word forms must not be empty");
        Self { forms }
    }

    /// Form at `index`, or the first form when the column is absent
    #[inline]
    pub fn get(&self, index: usize) -> &str {
        self.forms
            .get(index)
            .or_else(|| self.forms.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Number of distinct columns
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// True when no forms are stored
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
