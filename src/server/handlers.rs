//! Request handlers for the answering function.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::copy::SYSTEM_PROMPT;
use crate::error::{LensError, LensResult};
use crate::models::AskRequest;
use crate::traits::CompletionProvider;

use super::splitter::split_sentences;

/// Shared state for the function handlers.
#[derive(Clone)]
pub struct FunctionState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl FunctionState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}

/// Answer one question.
///
/// Success and failure both reply with a JSON array of strings; only the
/// status tells them apart.
pub async fn invoke_handler(State(state): State<FunctionState>, body: Bytes) -> Response {
    match answer(&state, &body).await {
        Ok(sentences) => {
            tracing::debug!(count = sentences.len(), "answered question");
            (StatusCode::OK, Json(sentences)).into_response()
        }
        Err(err) => {
            tracing::warn!(code = err.error_code(), error = %err, "answering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(vec![err.to_string()])).into_response()
        }
    }
}

async fn answer(state: &FunctionState, body: &[u8]) -> LensResult<Vec<String>> {
    let request: AskRequest =
        serde_json::from_slice(body).map_err(|e| LensError::InvalidRequest {
            message: e.to_string(),
        })?;
    let completion = state
        .provider
        .complete(SYSTEM_PROMPT, &request.message)
        .await?;
    Ok(split_sentences(&completion))
}
