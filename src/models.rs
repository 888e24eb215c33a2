// src/models.rs
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

// Result of inserting a credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Stored(i64),
    UsernameExists,
}
