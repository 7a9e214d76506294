//! Result type alias for lenschat operations.

use super::lens_error::LensError;

/// Type alias for Results using LensError.
///
/// # Example
///
/// ```ignore
/// use lenschat::error::LensResult;
///
/// fn load() -> LensResult<ServerConfig> {
///     Ok(ServerConfig::from_env()?)
/// }
/// ```
pub type LensResult<T> = Result<T, LensError>;
