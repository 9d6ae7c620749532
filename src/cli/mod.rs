//! Command-line interface.
//!
//! The dispatcher runs early in `main()` and handles one-shot flags before
//! the TUI starts:
//!
//! ```ignore
//! use studio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config) {
//!     return result;
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, TuiOptions};
pub use version::{version_line, USAGE, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::auth::{Credentials, CredentialsManager};
use crate::config::StudioConfig;

/// Run a one-shot CLI command.
///
/// # Returns
///
/// * `None` - the command is `RunTui`
/// * `Some(Ok(()))` - a one-shot command succeeded
/// * `Some(Err(e))` - a one-shot command failed or the arguments were invalid
pub fn run_cli_command(command: &CliCommand, config: &StudioConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            Some(Ok(()))
        }
        CliCommand::SetToken(token) => {
            let manager = CredentialsManager::in_dir(&config.data_dir);
            Some(
                manager
                    .save(&Credentials::with_token(token.clone()))
                    .map(|_| println!("Token saved to {}", manager.storage_path().display()))
                    .map_err(|e| eyre!(e)),
            )
        }
        CliCommand::ClearToken => {
            let manager = CredentialsManager::in_dir(&config.data_dir);
            Some(
                manager
                    .clear()
                    .map(|_| println!("Token cleared"))
                    .map_err(|e| eyre!(e)),
            )
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::RunTui(_) => None,
    }
}
