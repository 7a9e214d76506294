//! Application state management
//!
//! - [`session`]: chat session state and its transition function

pub mod session;

pub use session::{Effect, Epoch, Phase, SessionEvent, SessionState};
