//! Command-line argument parsing for lenschat.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the answering function server
    Serve,
    /// Run the console chat (default)
    Chat,
    /// An argument nobody understands
    Invalid(String),
}

/// Parse command-line arguments and return the command to run.
///
/// Flags win over subcommands wherever they appear.
///
/// ```
/// use lenschat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["lenschat".to_string(), "serve".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Serve);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::Chat;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ if matches!(command, CliCommand::Invalid(_)) => {}
            "serve" => command = CliCommand::Serve,
            "chat" => command = CliCommand::Chat,
            other => command = CliCommand::Invalid(other.to_string()),
        }
    }
    command
}
