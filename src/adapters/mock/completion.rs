//! Scripted completion provider for function server tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::ProviderError;
use crate::traits::CompletionProvider;

/// One recorded `complete` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionCall {
    pub system_prompt: String,
    pub user_message: String,
}

/// Returns a fixed completion, or a fixed API failure.
#[derive(Clone)]
pub struct MockCompletionProvider {
    outcome: Arc<Mutex<Result<String, (u16, String)>>>,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl MockCompletionProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(text.into()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call fails with `ProviderError::Api { status, message }`.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Err((status, message.into())))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(CompletionCall {
            system_prompt: system_prompt.to_string(),
            user_message: user_message.to_string(),
        });
        match &*self.outcome.lock().unwrap() {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(ProviderError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
