//! Mock implementations for testing.
//!
//! Test doubles for every trait seam, so sessions and the function server can
//! be exercised without network access.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockAnswerService`] - scripted replies with an optional gate
//! - [`MockCompletionProvider`] - fixed completion text or API failure

pub mod answer;
pub mod completion;
pub mod http;

pub use answer::MockAnswerService;
pub use completion::{CompletionCall, MockCompletionProvider};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
