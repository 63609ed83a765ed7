//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use wordnum_core::GenderGroup;

use crate::config::CliConfig;

pub mod amount;
pub mod list;
pub mod spell;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Spell whole numbers in words
    Spell(spell::SpellArgs),

    /// Spell a currency amount in words
    Amount(amount::AmountArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages and their culture tags
    Languages,

    /// List currencies a language can spell
    Currencies {
        /// Language name, ISO code or culture tag
        #[arg(short, long)]
        language: Option<String>,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Spell(args) => args.execute(config),
            Commands::Amount(args) => args.execute(config),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Languages => list::languages(),
                ListCommands::Currencies { language } => {
                    list::currencies(config.language(language.as_deref()))
                }
            },
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Spelled text, one value per line
    #[default]
    Text,
    /// JSON array of values with their language and currency
    Json,
}

/// Gender agreement for spelled numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Gender {
    /// Standalone forms
    #[default]
    None,
    /// Masculine agreement
    Masculine,
    /// Feminine agreement
    Feminine,
    /// Neuter agreement
    Neuter,
}

impl From<Gender> for GenderGroup {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::None => GenderGroup::None,
            Gender::Masculine => GenderGroup::Masculine,
            Gender::Feminine => GenderGroup::Feminine,
            Gender::Neuter => GenderGroup::Neuter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_conversion() {
        assert_eq!(GenderGroup::from(Gender::None), GenderGroup::None);
        assert_eq!(GenderGroup::from(Gender::Feminine), GenderGroup::Feminine);
        assert_eq!(GenderGroup::from(Gender::Neuter), GenderGroup::Neuter);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("markdown", true).is_err());
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Currencies {
                language: Some("pl".to_string()),
            },
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("Currencies"));
        assert!(debug_str.contains("pl"));
    }
}
