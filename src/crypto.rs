// src/crypto.rs
use thiserror::Error;

pub use bcrypt::DEFAULT_COST;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Verification error: {0}")]
    VerificationError(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Hash a password with bcrypt. A fresh salt is generated on every call, so
/// hashing the same plaintext twice yields two different strings.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| CryptoError::HashingError(e.to_string()))
}

// Check a plaintext against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).map_err(|e| CryptoError::VerificationError(e.to_string()))
}

// Keep a configured cost inside the range bcrypt accepts
pub fn clamp_cost(cost: u32) -> u32 {
    cost.clamp(4, 31)
}
