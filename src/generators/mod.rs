// src/generators/mod.rs
mod password;

pub use password::{PasswordGenerator, DEFAULT_LENGTH};
