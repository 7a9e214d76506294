//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use lenschat::session::ChatSession;

/// Question used by the shipping inquiry scenario.
pub const SHIPPING_QUESTION: &str = "배송 문의";

/// The raw reply the answering function gives for the shipping inquiry.
pub const SHIPPING_REPLY: &str = r#"["1~2일 내 배송됩니다", "배송비는 3만원 이상 무료입니다"]"#;

pub fn shipping_options() -> Vec<String> {
    vec![
        "1~2일 내 배송됩니다".to_string(),
        "배송비는 3만원 이상 무료입니다".to_string(),
    ]
}

/// A chat session backed by a scripted answering service.
pub fn chat_with(service: &MockAnswerService) -> ChatSession {
    ChatSession::new(Arc::new(service.clone()))
}

/// URL of the answering function on a wiremock or local server.
pub fn function_url(base: &str) -> String {
    format!("{}{}", base, lenschat::server::FUNCTION_PATH)
}
