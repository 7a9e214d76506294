//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `lenschat::adapters::mock` and adds builders
//! for the setups the integration tests share.

pub use lenschat::adapters::mock::{
    MockAnswerService, MockCompletionProvider, MockHttpClient, MockResponse,
};
pub use lenschat::traits::{Headers, HttpClient, Response};

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a response with a JSON content type.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::json_body(status, json.to_string())),
        );
        self
    }

    /// Configures a transport failure.
    #[allow(dead_code)]
    pub fn with_connection_error(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(lenschat::traits::HttpError::ConnectionFailed(
                "connection refused".to_string(),
            )),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
