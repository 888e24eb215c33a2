use rand::distributions::{Distribution, Uniform};

use crate::core::strength::{self, Strength};

/// Upper and lowercase letters, digits and the special set (70 characters).
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub const DEFAULT_LENGTH: usize = 12;

/// Draw `length` characters uniformly, with replacement, from [`ALPHABET`].
///
/// The result is not checked against the strength rules; a short or unlucky
/// draw may miss a digit or symbol.
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..ALPHABET.len());

    (0..length)
        .map(|_| ALPHABET[dist.sample(&mut rng)] as char)
        .collect()
}

pub struct PasswordGenerator {
    length: usize,
}

impl PasswordGenerator {
    pub fn new(length: usize) -> Self {
        PasswordGenerator { length }
    }

    pub fn generate(&self) -> String {
        generate_password(self.length)
    }

    // Regenerate until the draw rates at least Strong, giving up after `max_attempts`
    pub fn generate_validated(&self, max_attempts: usize) -> Option<String> {
        (0..max_attempts)
            .map(|_| self.generate())
            .find(|candidate| strength::evaluate(candidate, "").strength >= Strength::Strong)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}
