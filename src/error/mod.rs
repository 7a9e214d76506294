//! Unified error handling for lenschat.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: network, provider and configuration errors
//! - **Unified Error Type**: `LensError` consolidates them
//! - **Result Type Alias**: `LensResult<T>`
//!
//! Malformed replies are not errors at all: the normalizer folds them into
//! a text message. Errors here only describe transport, provider and setup
//! failures, and even those end up as a generic bot message in the chat.
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection, timeout |
//! | Auth | Rejected key (401/403) |
//! | Server | Function/provider failure (5xx) |
//! | Client | Malformed request body |
//! | Configuration | Missing/invalid env settings |
//! | System | Socket/stdin I/O |

mod category;
mod config;
mod lens_error;
mod network;
mod provider;
mod result;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use lens_error::LensError;
pub use network::NetworkError;
pub use provider::ProviderError;
pub use result::LensResult;
