//! `HttpClient` over reqwest.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::RequestBuilder;

use crate::traits::{Headers, HttpClient, HttpError, Response};

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(message)
        } else {
            HttpError::Other(message)
        }
    }
}

/// Production HTTP client.
///
/// No request timeout is configured: a hung upstream stalls only the call
/// that is waiting on it.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header map as owned strings. Values that are not visible ASCII are skipped.
    fn header_pairs(headers: &HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect()
    }

    /// Send a request and buffer the whole body.
    async fn execute(builder: RequestBuilder, headers: &Headers) -> Result<Response, HttpError> {
        let builder = headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let response_headers = Self::header_pairs(response.headers());
        let body = response.bytes().await?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        Self::execute(self.client.post(url).body(body.to_string()), headers).await
    }
}
