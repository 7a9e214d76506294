//! OpenAI-compatible chat completion provider.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ServerConfig;
use crate::error::{NetworkError, ProviderError};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::traits::{CompletionProvider, Headers, HttpClient};

/// Calls a `chat/completions` endpoint and returns the first choice's text.
pub struct OpenAiProvider {
    http: Arc<dyn HttpClient>,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(http: Arc<dyn HttpClient>, config: &ServerConfig) -> Self {
        Self {
            http,
            url: config.openai_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
        headers
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ProviderError> {
        let request =
            ChatCompletionRequest::new(&self.model, self.max_tokens, system_prompt, user_message);
        let body = serde_json::to_string(&request)?;

        tracing::debug!(model = %self.model, "requesting completion");
        let response = self
            .http
            .post(&self.url, &body, &self.headers())
            .await
            .map_err(|e| NetworkError::from_http(e, &self.url))?;

        if !response.is_success() {
            return Err(ProviderError::Api {
                status: response.status,
                message: api_error_message(&response.text()),
            });
        }

        let parsed: ChatCompletionResponse = response.json()?;
        Ok(parsed.first_content().unwrap_or_default().to_string())
    }
}

/// Pull `error.message` out of an API error body, falling back to the body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
