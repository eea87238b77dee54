//! monolog-cli - inspect and validate monolog logging configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve/build logging pipelines via the shared library crates.
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so env-derived defaults apply.
//! - Diagnostics go to stderr; command output goes to stdout.

mod args;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Cli, Commands};
use error::ExitCode;
use monolog_logger::ConfigResolver;

fn main() {
    // Load .env before parsing so MONOLOG_CFG set there is visible.
    if let Err(e) = ConfigResolver::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(&err)
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: Cli) -> Result<(), monolog_logger::Error> {
    match cli.command {
        Commands::Check {
            config,
            include,
            name,
            json,
        } => commands::run_check(config, include, &name, json),
        Commands::Levels { json } => {
            commands::run_levels(json);
            Ok(())
        }
    }
}
