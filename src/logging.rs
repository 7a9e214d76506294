//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used by the chat console when `RUST_LOG` is unset.
pub const CHAT_DEFAULT_FILTER: &str = "warn";
/// Filter used by the function server when `RUST_LOG` is unset.
pub const SERVE_DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice is harmless;
/// the second install is ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
