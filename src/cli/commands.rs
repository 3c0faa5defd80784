// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::core::config::Config;
use crate::models::{CharacterClass, PasswordRequest};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Answer prompts for size, boundary classes and character options
    Interactive,

    /// Generate a password from flags and configured defaults
    Generate(GenerateOptions),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Number of characters
    #[arg(long, short)]
    pub size: Option<usize>,

    /// Class of the first character
    #[arg(long, value_enum)]
    pub starts_with: Option<CharacterClass>,

    /// Class of the last character
    #[arg(long, value_enum)]
    pub ends_with: Option<CharacterClass>,

    /// Do not require or add numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Do not require or add special characters
    #[arg(long)]
    pub no_special: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateOptions {
    /// Flags override the configured defaults. The `--no-*` switches can
    /// only turn a class off.
    pub fn to_request(&self, config: &Config) -> PasswordRequest {
        let defaults = config.default_request();
        PasswordRequest {
            size: self.size.unwrap_or(defaults.size),
            starts_with: self.starts_with.unwrap_or(defaults.starts_with),
            ends_with: self.ends_with.unwrap_or(defaults.ends_with),
            with_numbers: defaults.with_numbers && !self.no_numbers,
            with_special_chars: defaults.with_special_chars && !self.no_special,
        }
    }
}
