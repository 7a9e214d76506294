//! Completion provider seam used by the answering function.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A language model that turns a system instruction and one user message
/// into reply text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_message: &str)
        -> Result<String, ProviderError>;
}
