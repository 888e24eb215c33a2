// src/cli/menu.rs
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use std::error::Error;

use crate::core::config::Config;
use crate::db::CredentialStore;
use crate::history::PasswordHistory;
use super::handlers;

const CHECK_OPTION: &str = "🔍  Check a password";
const GENERATE_OPTION: &str = "🔐  Generate strong password";
const EXIT_OPTION: &str = "❌  Exit";

// Esc and Ctrl+C end the prompt without being treated as failures
fn cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

pub fn prompt_password(message: &str) -> Result<Option<String>, Box<dyn Error>> {
    match Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
    {
        Ok(password) => Ok(Some(password)),
        Err(e) if cancelled(&e) => Ok(None),
        Err(e) => Err(Box::new(e)),
    }
}

fn prompt_username() -> Result<Option<String>, Box<dyn Error>> {
    match Text::new("Enter your username:").prompt() {
        Ok(username) => Ok(Some(username)),
        Err(e) if cancelled(&e) => Ok(None),
        Err(e) => Err(Box::new(e)),
    }
}

pub fn run_cli_menu(
    store: &CredentialStore,
    history: &PasswordHistory,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🔑 PASSWORD STRENGTH CHECKER     ║");
    println!("╚══════════════════════════════════════╝");
    println!("Check your password strength and get security insights.");

    loop {
        let options = vec![CHECK_OPTION, GENERATE_OPTION, EXIT_OPTION];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let choice = match selection {
            Ok(Some(choice)) => choice,
            Ok(None) => break,
            Err(e) if cancelled(&e) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match choice {
            CHECK_OPTION => {
                let Some(username) = prompt_username()? else { continue };
                let Some(password) = prompt_password("Enter your password:")? else { continue };

                if password.is_empty() {
                    println!("No password entered.");
                    continue;
                }

                let submission = handlers::handle_submission(store, history, &username, &password)?;
                handlers::print_submission(&submission);
            }
            GENERATE_OPTION => {
                let password = handlers::handle_generate(config.default_password_length, false)?;
                println!("Suggested Password: {}", password);
            }
            _ => break,
        }

        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}
