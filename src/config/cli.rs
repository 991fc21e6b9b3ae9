use crate::core::source::AngleSource;
use crate::utils::error::{AngleError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sexagesimal")]
#[command(about = "Convert, add and compare sexagesimal angles")]
pub struct Cli {
    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print an angle in DMS, decimal degrees and radians
    Convert {
        #[arg(allow_hyphen_values = true)]
        input: String,

        #[arg(long, value_enum, default_value_t = SourceFormat::Auto)]
        from: SourceFormat,
    },
    /// Add two angles
    Sum {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Compare two angles by decimal value
    Compare {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceFormat {
    /// Numbers are decimal degrees, anything else DMS text
    Auto,
    Decimal,
    Radians,
    Text,
}

impl SourceFormat {
    /// How to build an angle from `input`.
    pub fn source(self, input: &str) -> Result<AngleSource<'_>> {
        let number = || {
            input
                .trim()
                .parse::<f64>()
                .map_err(|_| AngleError::no_match(input))
        };
        Ok(match self {
            SourceFormat::Auto => AngleSource::from_literal(input),
            SourceFormat::Decimal => AngleSource::Decimal(number()?),
            SourceFormat::Radians => AngleSource::Radians(number()?),
            SourceFormat::Text => AngleSource::Text(input),
        })
    }
}
