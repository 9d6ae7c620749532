//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: studio [OPTIONS]

Options:
  --base-url <url>     Backend base URL (default: $STUDIO_API_BASE_URL or http://localhost:3000/)
  --project <id>       Open an existing generation
  --history            Start on the history screen
  --set-token <token>  Store the bearer token and exit
  --clear-token        Remove the stored token and exit
  -V, --version        Print version and exit
  -h, --help           Print this help and exit";

pub fn version_line() -> String {
    format!("studio {}", VERSION)
}
