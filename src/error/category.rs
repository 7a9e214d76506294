//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout.
    Network,

    /// Rejected credentials (HTTP 401/403).
    Auth,

    /// Answering function or provider failed (HTTP 5xx, bad upstream body).
    Server,

    /// The request we sent was malformed.
    Client,

    /// Missing or invalid settings.
    Configuration,

    /// OS-level failures such as binding a socket or reading stdin.
    System,
}

impl ErrorCategory {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again.",
            ErrorCategory::Auth => "Check the configured API key.",
            ErrorCategory::Server => "The service is having trouble. Try again shortly.",
            ErrorCategory::Client => "This looks like a bug. Please report it.",
            ErrorCategory::Configuration => "Fix the environment settings and restart.",
            ErrorCategory::System => "Check the address and permissions, then restart.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
