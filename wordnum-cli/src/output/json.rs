//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordnum_api::SpelledValue;

/// JSON formatter - outputs spelled values as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    values: Vec<SpelledValue>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            values: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_value(&mut self, value: &SpelledValue) -> Result<()> {
        self.values.push(value.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.values)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
