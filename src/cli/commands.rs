// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the interactive menu
    Interactive,

    /// Check one password and store it if it is strong
    Check {
        /// Username the password belongs to
        #[arg(long, short, default_value = "")]
        username: String,
    },

    /// Suggest a random password
    Generate {
        /// Number of characters
        #[arg(long, short)]
        length: Option<usize>,

        /// Keep drawing until the password rates at least Strong
        #[arg(long)]
        strong: bool,
    },

    /// Check a password against the stored hash for a user
    Verify {
        /// Username to look up
        #[arg(long, short, required = true)]
        username: String,
    },
}
