// src/cli/handlers.rs
use console::style;
use std::error::Error;

use crate::core::strength::{self, Strength, StrengthReport};
use crate::db::{CredentialStore, DbError};
use crate::generators::PasswordGenerator;
use crate::history::PasswordHistory;
use crate::models::StoreOutcome;

const MAX_GENERATION_ATTEMPTS: usize = 1000;

// What happened to the credential row for a strong password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Stored(i64),
    UsernameExists,
    MissingUsername,
}

#[derive(Debug)]
pub struct Submission {
    pub report: StrengthReport,
    pub credential: Option<CredentialStatus>,
    pub history_entries: Option<usize>,
}

impl Submission {
    pub fn persisted(&self) -> bool {
        self.history_entries.is_some()
    }
}

/// Evaluate a password and, when it rates Strong or better, write it to the
/// credential store and the history. The two writes are independent: a taken
/// username does not stop the history append.
pub fn handle_submission(
    store: &CredentialStore,
    history: &PasswordHistory,
    username: &str,
    password: &str,
) -> Result<Submission, Box<dyn Error>> {
    let report = strength::evaluate(password, username);
    log::info!("Password evaluated: score {} ({})", report.score, report.strength);

    if !report.strength.should_persist() {
        return Ok(Submission {
            report,
            credential: None,
            history_entries: None,
        });
    }

    let credential = match store.store_user(username, password) {
        Ok(StoreOutcome::Stored(id)) => CredentialStatus::Stored(id),
        Ok(StoreOutcome::UsernameExists) => CredentialStatus::UsernameExists,
        Err(DbError::EmptyUsername) => {
            log::warn!("Strong password submitted without a username; skipping credential store");
            CredentialStatus::MissingUsername
        }
        Err(e) => return Err(Box::new(e)),
    };

    let history_entries = history.append(password)?;

    Ok(Submission {
        report,
        credential: Some(credential),
        history_entries: Some(history_entries),
    })
}

pub fn print_submission(submission: &Submission) {
    let strength = submission.report.strength;
    let feedback = submission.report.feedback();

    // The last line is always the verdict
    if let Some((verdict, failures)) = feedback.split_last() {
        for line in failures {
            println!("{}", style(line).red());
        }
        match strength {
            Strength::VeryStrong | Strength::Strong => println!("{}", style(verdict).green().bold()),
            Strength::Moderate => println!("{}", style(verdict).yellow()),
            Strength::Weak => println!("{}", style(verdict).red().bold()),
        }
    }

    match submission.credential {
        Some(CredentialStatus::Stored(_)) => println!("User stored successfully."),
        Some(CredentialStatus::UsernameExists) => println!("Username already exists."),
        Some(CredentialStatus::MissingUsername) => {
            println!("⚠️ No username given, so no account was stored.")
        }
        None => {}
    }

    if submission.persisted() {
        println!("🔒 Your password has been securely stored.");
    }
}

pub fn handle_generate(length: usize, strong: bool) -> Result<String, Box<dyn Error>> {
    let generator = PasswordGenerator::new(length);

    if strong {
        generator
            .generate_validated(MAX_GENERATION_ATTEMPTS)
            .ok_or_else(|| {
                format!("Could not generate a strong password of length {}", length).into()
            })
    } else {
        Ok(generator.generate())
    }
}

pub fn handle_verify(
    store: &CredentialStore,
    username: &str,
    password: &str,
) -> Result<bool, Box<dyn Error>> {
    Ok(store.verify_user(username, password)?)
}
