use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use inquire::InquireError;

mod cli;
mod core;
mod generators;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

const EXIT_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    // Logs go to stderr; stdout carries only the result. The logger comes
    // up before the rest of the config so its warnings are not lost.
    env_logger::Builder::new()
        .filter_level(Config::load_log_level())
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .parse_default_env()
        .init();

    let config = Config::load();

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<InquireError>() {
            Some(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                log::info!("Prompt cancelled by user");
                eprintln!("{}", style("Cancelled.").yellow());
                ExitCode::from(EXIT_CANCELLED)
            }
            _ => {
                eprintln!("{} {:#}", style("❌").red(), e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let json = args.json;

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Interactive => {
            let request = cli::menu::prompt_request()?;
            let mut generator = PasswordGenerator::new();
            cli::handlers::handle_generate(&mut generator, &request, json)
        }
        CliCommand::Generate(options) => {
            let request = options.to_request(config);
            let mut generator = match options.seed {
                Some(seed) => PasswordGenerator::with_seed(seed),
                None => PasswordGenerator::new(),
            };
            cli::handlers::handle_generate(&mut generator, &request, json)
        }
    }
}
