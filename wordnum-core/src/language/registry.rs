//! Converter registry
//!
//! Parses the embedded language tables once and hands out shared converter
//! singletons.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::language::interface::NumberConverter;
use crate::language::rules;
use crate::language::runtime::LanguageTables;
use crate::language::supported::Language;

type Entry = std::result::Result<Arc<dyn NumberConverter>, Error>;

/// Embedded converters, keyed by language
static CONVERTERS: OnceLock<HashMap<Language, Entry>> = OnceLock::new();

/// TOML table compiled into the binary for `language`
fn embedded_source(language: Language) -> &'static str {
    match language {
        Language::English => include_str!("../../configs/languages/english.toml"),
        Language::French => include_str!("../../configs/languages/french.toml"),
        Language::Russian => include_str!("../../configs/languages/russian.toml"),
        Language::Spanish => include_str!("../../configs/languages/spanish.toml"),
        Language::Turkish => include_str!("../../configs/languages/turkish.toml"),
        Language::Ukrainian => include_str!("../../configs/languages/ukrainian.toml"),
        Language::Bulgarian => include_str!("../../configs/languages/bulgarian.toml"),
        Language::Amharic => include_str!("../../configs/languages/amharic.toml"),
        Language::Polish => include_str!("../../configs/languages/polish.toml"),
        Language::Belarusian => include_str!("../../configs/languages/belarusian.toml"),
        Language::Latvian => include_str!("../../configs/languages/latvian.toml"),
    }
}

fn build(language: Language) -> Result<Arc<dyn NumberConverter>> {
    let tables = LanguageTables::from_toml_str(embedded_source(language))?;
    if tables.code() != language.code() {
        return Err(Error::InvalidTable {
            language: language.code().to_string(),
            reason: format!("table declares language code '{}'", tables.code()),
        });
    }
    Ok(rules::for_language(language, tables))
}

fn converters() -> &'static HashMap<Language, Entry> {
    CONVERTERS.get_or_init(|| {
        let mut map = HashMap::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let entry = build(language);
            if let Err(e) = &entry {
                log::warn!("Failed to load {} tables: {e}", language.name());
            }
            map.insert(language, entry);
        }
        log::debug!("Initialised {} number converters", map.len());
        map
    })
}

/// Shared converter for `language`
pub fn converter(language: Language) -> Result<Arc<dyn NumberConverter>> {
    match converters().get(&language) {
        Some(entry) => entry.clone(),
        None => Err(Error::UnsupportedLanguage(language.code().to_string())),
    }
}

/// Resolve a language name, code or culture tag and return its converter
pub fn converter_for(key: &str) -> Result<Arc<dyn NumberConverter>> {
    converter(Language::from_key(key)?)
}

/// Currency codes `language` can spell, in alphabetical order
pub fn supported_currencies(language: Language) -> Result<Vec<String>> {
    let converter = converter(language)?;
    Ok(converter
        .tables()
        .currencies
        .codes()
        .map(str::to_string)
        .collect())
}
