//! Configuration for the chat client and the answering function server.
//!
//! Both read environment variables and accept builder-style overrides.
//!
//! ```ignore
//! use lenschat::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()
//!     .with_function_url("http://localhost:54321/functions/v1/lens-gpt");
//! ```

use std::net::SocketAddr;

use crate::error::ConfigError;

pub const FUNCTION_URL_VAR: &str = "LENSCHAT_FUNCTION_URL";
pub const ANON_KEY_VAR: &str = "LENSCHAT_ANON_KEY";
pub const BIND_VAR: &str = "LENSCHAT_BIND";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_URL_VAR: &str = "LENSCHAT_OPENAI_URL";
pub const MODEL_VAR: &str = "LENSCHAT_MODEL";
pub const MAX_TOKENS_VAR: &str = "LENSCHAT_MAX_TOKENS";

pub const DEFAULT_FUNCTION_URL: &str = "http://127.0.0.1:54321/functions/v1/lens-gpt";
pub const DEFAULT_BIND: &str = "127.0.0.1:54321";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Read a variable, treating an empty value as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Settings for the chat console.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Full URL of the answering function
    pub function_url: String,
    /// Ambient service credential, sent with every call when set
    pub anon_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            function_url: DEFAULT_FUNCTION_URL.to_string(),
            anon_key: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `LENSCHAT_FUNCTION_URL` and `LENSCHAT_ANON_KEY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            function_url: env_var(FUNCTION_URL_VAR).unwrap_or(defaults.function_url),
            anon_key: env_var(ANON_KEY_VAR),
        }
    }

    pub fn with_function_url(mut self, url: impl Into<String>) -> Self {
        self.function_url = url.into();
        self
    }

    pub fn with_anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }
}

/// Settings for the answering function server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub openai_api_key: String,
    pub openai_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl ServerConfig {
    /// Defaults for everything except the provider key.
    pub fn new(openai_api_key: impl Into<String>) -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 54321)),
            openai_api_key: openai_api_key.into(),
            openai_url: DEFAULT_OPENAI_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Build from the environment. `OPENAI_API_KEY` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_var(OPENAI_API_KEY_VAR).ok_or(ConfigError::Missing {
            var: OPENAI_API_KEY_VAR,
        })?;
        let mut config = Self::new(api_key);

        if let Some(bind) = env_var(BIND_VAR) {
            config.bind = bind.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: BIND_VAR,
                    value: bind.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(url) = env_var(OPENAI_URL_VAR) {
            config.openai_url = url;
        }
        if let Some(model) = env_var(MODEL_VAR) {
            config.model = model;
        }
        if let Some(max_tokens) = env_var(MAX_TOKENS_VAR) {
            config.max_tokens = parse_max_tokens(&max_tokens)?;
        }
        Ok(config)
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_openai_url(mut self, url: impl Into<String>) -> Self {
        self.openai_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

fn parse_max_tokens(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(0) => Err(ConfigError::Invalid {
            var: MAX_TOKENS_VAR,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::Invalid {
            var: MAX_TOKENS_VAR,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}
