//! List command implementation

use anyhow::Result;
use std::io::{self, Write};
use wordnum_core::{supported_currencies, Language};

/// Print every supported language with its culture tags
pub fn languages() -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Available languages:")?;
    for language in Language::ALL {
        writeln!(
            out,
            "  {:<3} {:<11} {:<12} {}",
            language.code(),
            language.name(),
            language.native_name(),
            language.cultures().join(", ")
        )?;
    }
    Ok(())
}

/// Print the currencies `key` can spell
pub fn currencies(key: &str) -> Result<()> {
    let language = Language::from_key(key)?;
    let mut out = io::stdout().lock();
    writeln!(out, "Currencies for {}:", language.name())?;
    for code in supported_currencies(language)? {
        writeln!(out, "  {code}")?;
    }
    Ok(())
}
