//! Answering service backed by a remote HTTP function.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{LensError, LensResult, NetworkError};
use crate::models::{AskRequest, RawReply};
use crate::traits::{AnswerService, Headers, HttpClient, Response};

/// Invokes the named answering function with `{"message": ...}`.
///
/// The configured key, when present, is sent both as a bearer token and as
/// an `apikey` header, which is what hosted function gateways expect.
pub struct EdgeFunctionClient {
    http: Arc<dyn HttpClient>,
    url: String,
    anon_key: Option<String>,
}

impl EdgeFunctionClient {
    pub fn new(http: Arc<dyn HttpClient>, config: &ClientConfig) -> Self {
        Self {
            http,
            url: config.function_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Client for a function URL with no credentials.
    pub fn with_url(http: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            anon_key: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(key) = &self.anon_key {
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
            headers.insert("apikey".to_string(), key.clone());
        }
        headers
    }
}

#[async_trait]
impl AnswerService for EdgeFunctionClient {
    async fn ask(&self, message: &str) -> LensResult<RawReply> {
        let body = serde_json::to_string(&AskRequest::new(message)).map_err(|e| {
            LensError::InvalidRequest {
                message: e.to_string(),
            }
        })?;

        tracing::debug!(url = %self.url, "invoking answering function");
        let response = self
            .http
            .post(&self.url, &body, &self.headers())
            .await
            .map_err(|e| NetworkError::from_http(e, &self.url))?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "answering function failed");
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: response.text(),
            }
            .into());
        }

        Ok(decode_reply(&response))
    }
}

/// Decode a successful function response the way a browser client would:
/// JSON bodies are parsed, anything else is taken as a string.
pub fn decode_reply(response: &Response) -> RawReply {
    if !response.is_json() {
        return RawReply::Text(response.text());
    }
    match response.json::<Value>() {
        Ok(value) => RawReply::from_json(value),
        Err(err) => {
            tracing::debug!(error = %err, "JSON content type with non-JSON body");
            RawReply::Text(response.text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use bytes::Bytes;

    const URL: &str = "http://functions.test/functions/v1/lens-gpt";

    fn client_with(response: MockResponse) -> (EdgeFunctionClient, MockHttpClient) {
        let http = MockHttpClient::new();
        http.set_response(URL, response);
        let client = EdgeFunctionClient::new(
            Arc::new(http.clone()),
            &ClientConfig::default()
                .with_function_url(URL)
                .with_anon_key("anon-123"),
        );
        (client, http)
    }

    #[tokio::test]
    async fn test_ask_posts_message_with_credentials() {
        let (client, http) = client_with(MockResponse::Success(Response::json_body(200, "[]")));
        client.ask("배송 문의").await.unwrap();

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
        assert_eq!(requests[0].body, r#"{"message":"배송 문의"}"#);
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer anon-123".to_string())
        );
        assert_eq!(requests[0].headers.get("apikey"), Some(&"anon-123".to_string()));
    }

    #[tokio::test]
    async fn test_json_array_becomes_list() {
        let (client, _) = client_with(MockResponse::Success(Response::json_body(
            200,
            r#"["A","B"]"#,
        )));
        assert_eq!(
            client.ask("q").await.unwrap(),
            RawReply::List(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[tokio::test]
    async fn test_plain_body_becomes_text() {
        let (client, _) = client_with(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"["A","B"]"#),
        )));
        assert_eq!(
            client.ask("q").await.unwrap(),
            RawReply::Text(r#"["A","B"]"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_json_null_is_unknown() {
        let (client, _) = client_with(MockResponse::Success(Response::json_body(200, "null")));
        assert_eq!(client.ask("q").await.unwrap(), RawReply::Unknown);
    }

    #[tokio::test]
    async fn test_error_status_is_network_error() {
        let (client, _) = client_with(MockResponse::Success(Response::json_body(
            500,
            r#"["boom"]"#,
        )));
        let err = client.ask("q").await.unwrap_err();
        assert!(matches!(
            err,
            LensError::Network(NetworkError::HttpStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_url() {
        let (client, _) = client_with(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        match client.ask("q").await.unwrap_err() {
            LensError::Network(NetworkError::ConnectionFailed { url, .. }) => assert_eq!(url, URL),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_key_sends_no_auth_headers() {
        let client = EdgeFunctionClient::with_url(Arc::new(MockHttpClient::new()), URL);
        let headers = client.headers();
        assert!(headers.get("Authorization").is_none());
        assert!(headers.get("apikey").is_none());
        assert_eq!(client.url(), URL);
    }
}
