//! Configuration errors.

use thiserror::Error;

/// A required setting is missing or unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set")]
    Missing { var: &'static str },

    #[error("environment variable {var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Missing { .. } => "E_CFG_MISSING",
            ConfigError::Invalid { .. } => "E_CFG_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::Missing {
            var: "OPENAI_API_KEY",
        };
        assert_eq!(err.to_string(), "environment variable OPENAI_API_KEY is not set");

        let err = ConfigError::Invalid {
            var: "LENSCHAT_MAX_TOKENS",
            value: "lots".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("'lots'"));
        assert_eq!(err.error_code(), "E_CFG_INVALID");
    }
}
