use color_eyre::eyre::eyre;
use color_eyre::Result;

use lenschat::cli::{parse_args, run_cli_command, CliCommand};
use lenschat::config::{ClientConfig, ServerConfig};
use lenschat::error::LensError;
use lenschat::logging::{init_tracing, CHAT_DEFAULT_FILTER, SERVE_DEFAULT_FILTER};
use lenschat::{console, server};

/// Turn a domain error into a report carrying its code and hint.
fn report(err: LensError) -> color_eyre::Report {
    eyre!(
        "[{}] {}\n{}",
        err.error_code(),
        err.user_message(),
        err.recovery_hint()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    match command {
        CliCommand::Serve => {
            init_tracing(SERVE_DEFAULT_FILTER);
            let config = ServerConfig::from_env().map_err(|e| report(e.into()))?;
            server::serve(&config).await.map_err(report)?;
        }
        _ => {
            init_tracing(CHAT_DEFAULT_FILTER);
            let config = ClientConfig::from_env();
            console::run_chat(&config).await.map_err(report)?;
        }
    }

    Ok(())
}
