// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::crypto;
use crate::generators::DEFAULT_LENGTH;

// Configuration for the password checker
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub database_path: PathBuf,
    pub history_path: PathBuf,

    // Hashing
    pub bcrypt_cost: u32,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            database_path: PathBuf::from("users.db"),
            history_path: PathBuf::from("password_history.json"),

            // Hashing
            bcrypt_cost: crypto::DEFAULT_COST,

            // Password Generation
            default_password_length: DEFAULT_LENGTH,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Storage
        if let Ok(path) = env::var("PASSWORD_DB") {
            config.database_path = PathBuf::from(path);
        }

        if let Ok(path) = env::var("PASSWORD_HISTORY") {
            config.history_path = PathBuf::from(path);
        }

        // Hashing (runs before the logger exists, so complaints go to stderr)
        if let Ok(val) = env::var("BCRYPT_COST") {
            match parse_cost(&val) {
                Some(cost) => config.bcrypt_cost = cost,
                None => eprintln!("⚠️ Invalid BCRYPT_COST '{}', using {}", val, config.bcrypt_cost),
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            if let Some(filter) = parse_level(&level) {
                config.log_level = filter;
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

fn parse_cost(val: &str) -> Option<u32> {
    val.trim().parse::<u32>().ok().map(crypto::clamp_cost)
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_files() {
        let config = Config::default();
        assert_eq!(config.database_path, PathBuf::from("users.db"));
        assert_eq!(config.history_path, PathBuf::from("password_history.json"));
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.default_password_length, 12);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn bcrypt_cost_parses_and_clamps() {
        assert_eq!(parse_cost("10"), Some(10));
        assert_eq!(parse_cost(" 8 "), Some(8));
        assert_eq!(parse_cost("2"), Some(4));
        assert_eq!(parse_cost("40"), Some(31));
        assert_eq!(parse_cost("twelve"), None);
        assert_eq!(parse_cost("-1"), None);
    }

    #[test]
    fn log_levels_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
