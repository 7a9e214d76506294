//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`EdgeFunctionClient`] - [`AnswerService`](crate::traits::AnswerService) over the answering function
//! - [`OpenAiProvider`] - [`CompletionProvider`](crate::traits::CompletionProvider) over `chat/completions`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every seam.

pub mod edge_function;
pub mod mock;
pub mod openai;
pub mod reqwest_http;

pub use edge_function::{decode_reply, EdgeFunctionClient};
pub use mock::{MockAnswerService, MockCompletionProvider, MockHttpClient};
pub use openai::OpenAiProvider;
pub use reqwest_http::ReqwestHttpClient;
