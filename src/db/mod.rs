// src/db/mod.rs
use std::path::Path;
use thiserror::Error;

use crate::crypto::CryptoError;

pub mod sqlite;

pub use sqlite::CredentialStore;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Hashing error: {0}")]
    CryptoError(#[from] CryptoError),

    #[error("Integrity check failed: {0}")]
    Corrupted(String),

    #[error("Username must not be empty")]
    EmptyUsername,
}

pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Whether the error means the file on disk is not a usable SQLite database.
    pub fn is_corruption(&self) -> bool {
        match self {
            DbError::Corrupted(_) => true,
            DbError::SqliteError(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::NotADatabase | rusqlite::ErrorCode::DatabaseCorrupt
            ),
            _ => false,
        }
    }
}

// Open the credential store used for the whole session
pub fn init_db(path: &Path, bcrypt_cost: u32) -> Result<CredentialStore> {
    CredentialStore::open(path, bcrypt_cost)
}
