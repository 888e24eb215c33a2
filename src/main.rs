use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod core;
mod models;
mod crypto;
mod db;
mod generators;
mod history;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::db::CredentialStore;
use crate::history::PasswordHistory;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(db) = &args.db {
        config.database_path = db.clone();
    }
    if let Some(history) = &args.history {
        config.history_path = history.clone();
    }

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("❌ Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("🔑 Starting password checker");
    log::debug!("Loaded config: {:?}", config);

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn open_storage(config: &Config) -> Result<(CredentialStore, PasswordHistory), Box<dyn Error>> {
    let store = db::init_db(&config.database_path, config.bcrypt_cost)?;
    if store.recovered() {
        println!("⚠️ The credential store was corrupted and has been recreated empty.");
    }
    log::info!("Credential store holds {} users", store.count_users()?);
    let history = PasswordHistory::new(&config.history_path, config.bcrypt_cost);
    log::debug!(
        "Using credential store {} and history {}",
        store.path().display(),
        history.path().display()
    );
    Ok((store, history))
}

fn run(command: Option<CliCommand>, config: &Config) -> Result<(), Box<dyn Error>> {
    match command {
        Some(CliCommand::Generate { length, strong }) => {
            let length = length.unwrap_or(config.default_password_length);
            println!("Suggested Password: {}", cli::handlers::handle_generate(length, strong)?);
        }
        None | Some(CliCommand::Interactive) => {
            // The store lives for the whole session and closes when dropped
            let (store, history) = open_storage(config)?;
            cli::menu::run_cli_menu(&store, &history, config)?;
            store.close()?;
        }
        Some(CliCommand::Check { username }) => {
            let (store, history) = open_storage(config)?;
            if let Some(password) = cli::menu::prompt_password("Enter your password:")? {
                let submission = cli::handlers::handle_submission(&store, &history, &username, &password)?;
                cli::handlers::print_submission(&submission);
            }
            store.close()?;
        }
        Some(CliCommand::Verify { username }) => {
            let (store, _history) = open_storage(config)?;
            if let Some(password) = cli::menu::prompt_password("Enter your password:")? {
                if cli::handlers::handle_verify(&store, &username, &password)? {
                    println!("✅ Password matches the stored credential for '{}'.", username);
                } else {
                    println!("❌ Password does not match the stored credential for '{}'.", username);
                }
            }
            store.close()?;
        }
    }

    log::info!("✅ Password checker shutdown complete.");
    Ok(())
}
