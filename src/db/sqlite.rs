// src/db/sqlite.rs
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto;
use crate::models::{CredentialRecord, StoreOutcome};
use super::{DbError, Result};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    );
"#;

/// Local table of usernames and bcrypt hashes.
///
/// The connection lives as long as the store and is closed when it is
/// dropped. Opening a file that fails SQLite's integrity check DELETES the
/// file and starts over with an empty table; nothing from the old file is
/// kept.
#[derive(Debug)]
pub struct CredentialStore {
    conn: Connection,
    path: PathBuf,
    bcrypt_cost: u32,
    recovered: bool,
}

impl CredentialStore {
    pub fn open(path: impl AsRef<Path>, bcrypt_cost: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create the database directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        log::info!("Opening credential store at: {}", path.display());

        let (conn, recovered) = match Self::connect_checked(&path) {
            Ok(conn) => (conn, false),
            Err(e) if e.is_corruption() => {
                log::warn!(
                    "Credential store {} is corrupted ({}); deleting it and starting empty",
                    path.display(),
                    e
                );
                (Self::recreate(&path)?, true)
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            conn,
            path,
            bcrypt_cost: crypto::clamp_cost(bcrypt_cost),
            recovered,
        })
    }

    fn connect_checked(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;

        let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            log::warn!("Integrity check reported: {}", status);
            return Err(DbError::Corrupted(status));
        }

        conn.execute_batch(CREATE_USERS_TABLE)?;
        Ok(conn)
    }

    fn recreate(path: &Path) -> Result<Connection> {
        if path.exists() {
            fs::remove_file(path)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(CREATE_USERS_TABLE)?;
        Ok(conn)
    }

    /// Whether opening had to discard a corrupted file.
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hash the password and insert it under `username`.
    ///
    /// A taken username is reported as [`StoreOutcome::UsernameExists`] and
    /// leaves the table untouched.
    pub fn store_user(&self, username: &str, password: &str) -> Result<StoreOutcome> {
        if username.is_empty() {
            return Err(DbError::EmptyUsername);
        }

        let password_hash = crypto::hash_password(password, self.bcrypt_cost)?;

        match self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password_hash],
        ) {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                log::info!("Stored credential for user '{}' (id {})", username, id);
                Ok(StoreOutcome::Stored(id))
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                log::info!("Username '{}' already exists", username);
                Ok(StoreOutcome::UsernameExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn get_user(&self, username: &str) -> Result<Option<CredentialRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, username, password FROM users WHERE username = ?1",
                params![username],
                |row| {
                    Ok(CredentialRecord {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    // Check a plaintext against the stored hash; unknown users never match
    pub fn verify_user(&self, username: &str, password: &str) -> Result<bool> {
        match self.get_user(username)? {
            Some(record) => Ok(crypto::verify_password(password, &record.password_hash)?),
            None => Ok(false),
        }
    }

    pub fn count_users(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| DbError::from(e))
    }
}
