//! Command-line argument parsing.

/// Options that shape the TUI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiOptions {
    /// Overrides `STUDIO_API_BASE_URL`
    pub base_url: Option<String>,
    /// Generation to open in the create workflow
    pub project_id: Option<String>,
    /// Start on the history screen
    pub start_on_history: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Store a bearer token and exit
    SetToken(String),
    /// Remove the stored token and exit
    ClearToken,
    /// Run the TUI application (default)
    RunTui(TuiOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name. One-shot commands (`--version`,
/// `--help`, token management) win over TUI options wherever they appear.
///
/// # Examples
///
/// ```
/// use studio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["studio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = TuiOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--clear-token" => return CliCommand::ClearToken,
            "--set-token" => {
                return match args.next().filter(|t| !t.trim().is_empty()) {
                    Some(token) => CliCommand::SetToken(token.trim().to_string()),
                    None => CliCommand::Invalid("--set-token requires a token".to_string()),
                };
            }
            "--base-url" => match args.next() {
                Some(url) => options.base_url = Some(url),
                None => return CliCommand::Invalid("--base-url requires a URL".to_string()),
            },
            "--project" => match args.next() {
                Some(id) => options.project_id = Some(id),
                None => return CliCommand::Invalid("--project requires an id".to_string()),
            },
            "--history" => options.start_on_history = true,
            other => return CliCommand::Invalid(format!("Unknown argument: {}", other)),
        }
    }

    CliCommand::RunTui(options)
}
