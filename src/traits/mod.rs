//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`AnswerService`] - answers one chat question, consumed by the session
//! - [`CompletionProvider`] - language model call, consumed by the function server

pub mod answer;
pub mod completion;
pub mod http;

pub use answer::AnswerService;
pub use completion::CompletionProvider;
pub use http::{Headers, HttpClient, HttpError, Response};
