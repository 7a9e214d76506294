use serde::{Deserialize, Serialize};

/// Body accepted by the answering function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskRequest {
    /// The user's question, already trimmed
    pub message: String,
}

impl AskRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Role of a chat-completion message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in a chat-completion request or response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
}

/// Request body for an OpenAI-compatible `chat/completions` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    /// Number of choices to generate
    pub n: u32,
}

impl ChatCompletionRequest {
    /// A single-choice request with a system instruction and one user turn.
    pub fn new(model: &str, max_tokens: u32, system_prompt: &str, user_message: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: user_message.to_string(),
                },
            ],
            max_tokens,
            n: 1,
        }
    }
}

/// Response body of a `chat/completions` call.
///
/// Only the fields the function reads are modelled; `choices` defaults to
/// empty so error bodies still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}
