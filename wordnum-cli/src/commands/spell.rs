//! Spell command implementation

use anyhow::Result;
use clap::Args;
use std::io;
use wordnum_api::{Config, Speller};

use super::{Gender, OutputFormat};
use crate::config::CliConfig;
use crate::output;

/// Arguments for the spell command
#[derive(Debug, Args)]
pub struct SpellArgs {
    /// Numbers to spell
    #[arg(required = true, allow_negative_numbers = true, value_name = "NUMBER")]
    pub numbers: Vec<i64>,

    /// Language name, ISO code or culture tag
    #[arg(short, long)]
    pub language: Option<String>,

    /// Gender agreement
    #[arg(short, long, value_enum, default_value = "none")]
    pub gender: Gender,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SpellArgs {
    /// Execute the spell command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let language = config.language(self.language.as_deref());
        let speller = Speller::with_config(
            Config::builder()
                .language(language)?
                .gender(self.gender.into())
                .build()?,
        )?;
        log::info!(
            "Spelling {} number(s) in {}",
            self.numbers.len(),
            speller.language()
        );

        let stdout = io::stdout();
        let mut formatter = output::create_formatter(config.format(self.format), stdout.lock());
        for &number in &self.numbers {
            formatter.write_value(&speller.integer_value(number)?)?;
        }
        formatter.finish()
    }
}
