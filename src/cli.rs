//! CLI definitions for winbridge.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// winbridge CLI.
#[derive(Parser)]
#[command(name = "winbridge")]
#[command(about = "Native window control bridge")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true, env = "WINBRIDGE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// Serve method calls as JSON lines on stdin/stdout (default)
    Serve,

    /// Dispatch a single method call and print the reply
    Call {
        /// Method name, e.g. getBounds
        method: String,

        /// Arguments as a JSON object
        arguments: Option<String>,

        /// Target channel (default: the configured channel)
        #[arg(long)]
        channel: Option<String>,
    },

    /// Load and validate the configuration file
    CheckConfig,
}
