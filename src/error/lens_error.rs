//! Unified error type for lenschat.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::network::NetworkError;
use super::provider::ProviderError;

/// Unified error type.
///
/// Consolidates the domain errors so callers get one categorization,
/// one code scheme and one user message per failure.
#[derive(Debug)]
pub enum LensError {
    /// Talking to the answering function failed.
    Network(NetworkError),

    /// The completion provider failed.
    Provider(ProviderError),

    /// Settings are missing or invalid.
    Config(ConfigError),

    /// A request body could not be decoded.
    InvalidRequest { message: String },

    /// OS-level I/O failure.
    Io(std::io::Error),
}

impl LensError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LensError::Network(NetworkError::HttpStatus { status: 401 | 403, .. }) => {
                ErrorCategory::Auth
            }
            LensError::Network(NetworkError::HttpStatus { status, .. }) if *status >= 500 => {
                ErrorCategory::Server
            }
            LensError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Server,
            LensError::Network(_) => ErrorCategory::Network,
            LensError::Provider(err) if err.is_auth() => ErrorCategory::Auth,
            LensError::Provider(ProviderError::Network(_)) => ErrorCategory::Network,
            LensError::Provider(_) => ErrorCategory::Server,
            LensError::Config(_) => ErrorCategory::Configuration,
            LensError::InvalidRequest { .. } => ErrorCategory::Client,
            LensError::Io(_) => ErrorCategory::System,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LensError::Network(err) => err.error_code(),
            LensError::Provider(err) => err.error_code(),
            LensError::Config(err) => err.error_code(),
            LensError::InvalidRequest { .. } => "E_REQ_INVALID",
            LensError::Io(_) => "E_SYS_IO",
        }
    }

    /// Message suitable for an operator reading the console.
    pub fn user_message(&self) -> String {
        match self {
            LensError::Network(err) => err.user_message(),
            LensError::Provider(err) => format!("The completion provider failed: {}", err),
            LensError::Config(err) => format!("Configuration problem: {}", err),
            LensError::InvalidRequest { message } => format!("Invalid request: {}", message),
            LensError::Io(err) => format!("I/O error: {}", err),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for LensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LensError::Network(err) => write!(f, "{}", err),
            LensError::Provider(err) => write!(f, "{}", err),
            LensError::Config(err) => write!(f, "{}", err),
            LensError::InvalidRequest { message } => write!(f, "{}", message),
            LensError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LensError::Network(err) => Some(err),
            LensError::Provider(err) => Some(err),
            LensError::Config(err) => Some(err),
            LensError::InvalidRequest { .. } => None,
            LensError::Io(err) => Some(err),
        }
    }
}

impl From<NetworkError> for LensError {
    fn from(err: NetworkError) -> Self {
        LensError::Network(err)
    }
}

impl From<ProviderError> for LensError {
    fn from(err: ProviderError) -> Self {
        LensError::Provider(err)
    }
}

impl From<ConfigError> for LensError {
    fn from(err: ConfigError) -> Self {
        LensError::Config(err)
    }
}

impl From<std::io::Error> for LensError {
    fn from(err: std::io::Error) -> Self {
        LensError::Io(err)
    }
}
