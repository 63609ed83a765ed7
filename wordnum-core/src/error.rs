//! Core error types (deterministic only)

use thiserror::Error;

use crate::types::MAX_NUMBER;

/// Errors raised while resolving a converter or spelling a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The language key matched no known language, name or culture tag
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The currency code is missing from the language's currency table
    #[error("unsupported currency '{currency}' for {language}")]
    UnsupportedCurrency {
        /// English name of the language that was asked
        language: &'static str,
        /// Currency code as given by the caller
        currency: String,
    },

    /// Value above the largest number the scale tables can express
    #[error("{value} exceeds the largest convertible number ({MAX_NUMBER})")]
    OutOfRange {
        /// Offending value, rendered as digits
        value: String,
    },

    /// Negative currency amount
    #[error("negative amount: {0}")]
    NegativeAmount(String),

    /// Embedded language table failed to parse or validate
    #[error("invalid {language} table: {reason}")]
    InvalidTable {
        /// Language code of the table
        language: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let error = Error::UnsupportedLanguage("klingon".to_string());
        assert_eq!(error.to_string(), "unsupported language: klingon");
    }

    #[test]
    fn test_unsupported_currency_display() {
        let error = Error::UnsupportedCurrency {
            language: "Latvian",
            currency: "XYZ".to_string(),
        };
        assert_eq!(error.to_string(), "unsupported currency 'XYZ' for Latvian");
    }

    #[test]
    fn test_out_of_range_mentions_limit() {
        let error = Error::OutOfRange {
            value: "1000000000000".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("1000000000000"));
        assert!(message.contains("999999999999"));
    }
}
