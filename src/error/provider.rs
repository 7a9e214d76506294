//! Completion provider errors.

use thiserror::Error;

use super::network::NetworkError;

/// Failure while asking the completion provider for an answer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced a usable HTTP response
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The provider answered with a non-success status
    #[error("completion API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider's body was not the expected JSON
    #[error("invalid completion response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Network(err) => err.error_code(),
            ProviderError::Api { .. } => "E_PROV_API",
            ProviderError::InvalidResponse(_) => "E_PROV_INVALID",
        }
    }

    /// True when the provider rejected the configured key.
    pub fn is_auth(&self) -> bool {
        matches!(self, ProviderError::Api { status: 401 | 403, .. })
    }
}
