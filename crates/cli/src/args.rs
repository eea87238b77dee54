//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and validate monolog logging configuration.
#[derive(Parser, Debug)]
#[command(name = "monolog-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the configuration and describe the resulting pipeline.
    Check {
        /// Explicit config file path. Falls back to MONOLOG_CFG and the
        /// default monolog.cfg include-path search.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Extra include directory searched for config basenames.
        /// Repeatable.
        #[arg(long = "include", value_name = "DIR")]
        include: Vec<PathBuf>,

        /// Logger name to build.
        #[arg(long, default_value = "monolog")]
        name: String,

        /// Emit machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the severity table.
    Levels {
        /// Emit machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
}
