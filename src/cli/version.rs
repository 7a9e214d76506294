//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: lenschat [COMMAND]

Commands:
  chat    Chat with the lens assistant in this terminal (default)
  serve   Run the answering function server

Options:
  -h, --help     Print this help
  -V, --version  Print version

Environment:
  LENSCHAT_FUNCTION_URL  Answering function URL used by chat
  LENSCHAT_ANON_KEY      Service key sent with each chat request
  LENSCHAT_BIND          Address the server listens on
  OPENAI_API_KEY         Provider key, required by serve
  LENSCHAT_OPENAI_URL    Chat completions endpoint
  LENSCHAT_MODEL         Completion model
  LENSCHAT_MAX_TOKENS    Completion token limit
  RUST_LOG               Log filter (logs go to stderr)";

pub fn version_string() -> String {
    format!("lenschat {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("{}", version_string());
    std::process::exit(0)
}
