// src/history/mod.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::crypto::{self, CryptoError};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Hashing error: {0}")]
    CryptoError(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Append-only list of hashed passwords kept in a JSON file.
///
/// Every append reads the whole file, adds one freshly salted hash and
/// rewrites it. Nothing guards against two processes doing this at once.
pub struct PasswordHistory {
    path: PathBuf,
    bcrypt_cost: u32,
}

impl PasswordHistory {
    pub fn new(path: impl Into<PathBuf>, bcrypt_cost: u32) -> Self {
        Self {
            path: path.into(),
            bcrypt_cost: crypto::clamp_cost(bcrypt_cost),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // A missing or unreadable file counts as an empty history
    pub fn load(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read history file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "History file {} is not a JSON list of hashes ({}); starting fresh",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Hash `password` with a new salt and add it to the end of the history.
    /// Returns the number of entries now stored.
    pub fn append(&self, password: &str) -> Result<usize> {
        let mut entries = self.load();
        entries.push(crypto::hash_password(password, self.bcrypt_cost)?);

        self.save(&entries)?;
        log::debug!("History now holds {} entries", entries.len());

        Ok(entries.len())
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        entries.serialize(&mut serializer)?;

        fs::write(&self.path, buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEST_COST: u32 = 4;

    #[test]
    fn missing_file_is_empty() {
        let temp_dir = tempdir().expect("temp dir created");
        let history = PasswordHistory::new(temp_dir.path().join("password_history.json"), TEST_COST);

        assert!(history.load().is_empty());
    }

    #[test]
    fn malformed_file_is_replaced_on_append() {
        let temp_dir = tempdir().expect("temp dir created");
        let path = temp_dir.path().join("password_history.json");
        fs::write(&path, "{ not json").unwrap();

        let history = PasswordHistory::new(&path, TEST_COST);
        assert!(history.load().is_empty());

        assert_eq!(history.append("Str0ng!Pass").unwrap(), 1);
        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn non_string_list_counts_as_empty() {
        let temp_dir = tempdir().expect("temp dir created");
        let path = temp_dir.path().join("password_history.json");
        fs::write(&path, r#"{"entries": [1, 2]}"#).unwrap();

        assert!(PasswordHistory::new(&path, TEST_COST).load().is_empty());
    }

    #[test]
    fn identical_passwords_get_distinct_hashes() {
        let temp_dir = tempdir().expect("temp dir created");
        let history = PasswordHistory::new(temp_dir.path().join("password_history.json"), TEST_COST);

        history.append("Str0ng!Pass").unwrap();
        history.append("Str0ng!Pass").unwrap();

        let entries = history.load();
        assert_eq!(entries.len(), 2);
        assert_ne!(entries[0], entries[1]);
        for hash in &entries {
            assert!(crypto::verify_password("Str0ng!Pass", hash).unwrap());
        }
    }

    #[test]
    fn appends_preserve_order() {
        let temp_dir = tempdir().expect("temp dir created");
        let history = PasswordHistory::new(temp_dir.path().join("password_history.json"), TEST_COST);

        history.append("First!Pass1").unwrap();
        history.append("Second!Pass2").unwrap();
        assert_eq!(history.append("Third!Pass3").unwrap(), 3);

        let entries = history.load();
        assert!(crypto::verify_password("First!Pass1", &entries[0]).unwrap());
        assert!(crypto::verify_password("Second!Pass2", &entries[1]).unwrap());
        assert!(crypto::verify_password("Third!Pass3", &entries[2]).unwrap());
    }

    #[test]
    fn file_is_indented_with_four_spaces() {
        let temp_dir = tempdir().expect("temp dir created");
        let path = temp_dir.path().join("password_history.json");
        let history = PasswordHistory::new(&path, TEST_COST);

        history.append("Str0ng!Pass").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n    \"$2"));
        assert!(raw.ends_with("\"\n]"));
    }
}
