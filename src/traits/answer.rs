//! Answering service seam used by the chat session.

use async_trait::async_trait;

use crate::error::LensResult;
use crate::models::RawReply;

/// Remote capability that answers one user question.
///
/// The reply is returned untouched; shaping it is the normalizer's job.
/// Implementations make exactly one outbound call per `ask` with no retry.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, message: &str) -> LensResult<RawReply>;
}
