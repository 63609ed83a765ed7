//! Output formatting module

use anyhow::Result;
use std::io::Write;
use wordnum_api::SpelledValue;

use crate::commands::OutputFormat;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single spelled value
    fn write_value(&mut self, value: &SpelledValue) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Formatter for `format` writing to `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
