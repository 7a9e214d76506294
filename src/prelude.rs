//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lenschat::prelude::*;
//! ```

// Session
pub use crate::session::ChatSession;
pub use crate::state::{Effect, Epoch, Phase, SessionEvent, SessionState};

// Model types
pub use crate::models::{Message, MessageKind, NormalizedReply, RawReply, Sender};
pub use crate::normalizer::normalize;

// Seams and adapters
pub use crate::adapters::{EdgeFunctionClient, OpenAiProvider, ReqwestHttpClient};
pub use crate::traits::{AnswerService, CompletionProvider, HttpClient};

// Errors and configuration
pub use crate::config::{ClientConfig, ServerConfig};
pub use crate::error::{ErrorCategory, LensError, LensResult};
