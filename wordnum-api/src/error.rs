//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error raised by a converter
    #[error(transparent)]
    Core(#[from] wordnum_core::Error),

    /// Negative integers have no spelled form
    #[error("negative value: {0}")]
    NegativeValue(i64),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let error = ApiError::from(wordnum_core::Error::UnsupportedLanguage("xx".to_string()));
        assert_eq!(error.to_string(), "unsupported language: xx");
    }

    #[test]
    fn test_negative_value_display() {
        assert_eq!(ApiError::NegativeValue(-3).to_string(), "negative value: -3");
    }
}
