// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a password with a fixed first and last character class", long_about = None)]
pub struct Args {
    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to interactive prompts)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
