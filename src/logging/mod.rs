// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use crate::core::config::Config;

/// Route the `log` facade through env_logger.
///
/// Output goes to the configured log file when one is set so it does not
/// interleave with the interactive prompts, otherwise to stderr.
pub fn init_logging(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(true);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    // A second init (e.g. from tests) keeps the first logger
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialised: {}", e);
    }

    Ok(())
}
