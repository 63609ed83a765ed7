//! Data Transfer Objects for API

#[cfg(feature = "serde")]
use crate::error::Result;

/// A spelled value together with what produced it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpelledValue {
    /// Input value as written by the caller
    pub value: String,
    /// ISO 639-1 code of the language used
    pub language: String,
    /// Currency code for amounts
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub currency: Option<String>,
    /// Spelled-out text
    pub text: String,
}

impl SpelledValue {
    /// Create a DTO for a spelled number
    pub fn new(value: impl Into<String>, language: impl Into<String>, text: String) -> Self {
        Self {
            value: value.into(),
            language: language.into(),
            currency: None,
            text,
        }
    }

    /// Attach the currency of an amount
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_currency() {
        let value = SpelledValue::new("1.5", "en", "one dollar fifty cents".to_string())
            .with_currency("USD");
        assert_eq!(value.currency.as_deref(), Some("USD"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_omits_missing_currency() {
        let value = SpelledValue::new("7", "en", "seven".to_string());
        assert_eq!(
            value.to_json().unwrap(),
            r#"{"value":"7","language":"en","text":"seven"}"#
        );
    }
}
