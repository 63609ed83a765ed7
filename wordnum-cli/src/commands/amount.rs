//! Amount command implementation

use anyhow::Result;
use clap::Args;
use std::io;
use std::str::FromStr;
use wordnum_api::{Config, Speller};
use wordnum_core::{Decimal, Options};

use super::{Gender, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output;

/// Arguments for the amount command
#[derive(Debug, Args)]
pub struct AmountArgs {
    /// Amount with up to two meaningful decimals, e.g. 12.50
    #[arg(allow_negative_numbers = true, value_name = "AMOUNT")]
    pub amount: String,

    /// ISO 4217 currency code
    #[arg(short, long)]
    pub currency: String,

    /// Language name, ISO code or culture tag
    #[arg(short, long)]
    pub language: Option<String>,

    /// Override the currency's own gender for the main part
    #[arg(short, long, value_enum, default_value = "none")]
    pub gender: Gender,

    /// Capitalise the main-unit part
    #[arg(long)]
    pub upper_main: bool,

    /// Capitalise the sub-unit part
    #[arg(long)]
    pub upper_sub: bool,

    /// Leave out a zero main part
    #[arg(long)]
    pub no_main_zero: bool,

    /// Spell a zero sub-unit part
    #[arg(long)]
    pub sub_zero: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl AmountArgs {
    /// Execute the amount command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let value = Decimal::from_str(self.amount.trim())
            .map_err(|_| CliError::InvalidInput(format!("'{}' is not an amount", self.amount)))?;

        let speller = Speller::with_config(
            Config::builder()
                .language(config.language(self.language.as_deref()))?
                .gender(self.gender.into())
                .options(self.options(config.options))
                .build()?,
        )?;
        log::info!("Spelling {value} {} in {}", self.currency, speller.language());

        let stdout = io::stdout();
        let mut formatter = output::create_formatter(config.format(self.format), stdout.lock());
        formatter.write_value(&speller.amount_value(value, &self.currency)?)?;
        formatter.finish()
    }

    /// Flags applied on top of the configured options
    fn options(&self, mut options: Options) -> Options {
        if self.upper_main {
            options.main_unit_first_char_upper = true;
        }
        if self.upper_sub {
            options.sub_unit_first_char_upper = true;
        }
        if self.no_main_zero {
            options.main_unit_zero_enabled = false;
        }
        if self.sub_zero {
            options.sub_unit_zero_enabled = true;
        }
        options
    }
}
