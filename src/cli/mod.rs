//! CLI module for lenschat.
//!
//! Parses arguments and handles the commands that finish immediately.
//!
//! ```ignore
//! use lenschat::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // Otherwise chat or serve
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, version_string, USAGE, VERSION};

/// Run a command that needs no runtime.
///
/// Returns the exit code for `Help` and `Invalid`, `None` for `Chat` and
/// `Serve`. `Version` exits the process directly.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(0)
        }
        CliCommand::Invalid(arg) => {
            eprintln!("error: unexpected argument '{}'\n\n{}", arg, USAGE);
            Some(2)
        }
        CliCommand::Chat | CliCommand::Serve => None,
    }
}
