// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check password strength and store strong passwords hashed", long_about = None)]
pub struct Args {
    /// Path to the SQLite credential store
    #[arg(long, env = "PASSWORD_DB")]
    pub db: Option<PathBuf>,

    /// Path to the JSON password history
    #[arg(long, env = "PASSWORD_HISTORY")]
    pub history: Option<PathBuf>,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
