mod message;
mod reply;
mod request;

pub use message::{format_korean_time, Message, MessageKind, Sender};
pub(crate) use reply::json_items_to_strings;
pub use reply::{NormalizedReply, RawReply};
pub use request::{
    AskRequest, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole,
};
