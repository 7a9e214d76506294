//! Scripted answering service for session tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::error::{LensError, LensResult, NetworkError};
use crate::models::RawReply;
use crate::traits::AnswerService;

/// Answers questions from a queue of scripted outcomes.
///
/// With an empty queue every call fails with a network error. A gate can be
/// installed to hold each call until the test releases it, which is how tests
/// observe the awaiting phase or race a reset against a reply.
#[derive(Clone, Default)]
pub struct MockAnswerService {
    outcomes: Arc<Mutex<VecDeque<LensResult<RawReply>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    gate: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl MockAnswerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, reply: impl Into<RawReply>) -> &Self {
        self.outcomes.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Queue a failure.
    pub fn push_error(&self, error: LensError) -> &Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Hold every call until `notify_one` is called on the returned handle.
    pub fn gated(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Arc::clone(&notify));
        notify
    }

    /// Questions received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AnswerService for MockAnswerService {
    async fn ask(&self, message: &str) -> LensResult<RawReply> {
        self.calls.lock().unwrap().push(message.to_string());

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.outcomes.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(NetworkError::Other {
                message: "no scripted reply".to_string(),
            }
            .into())
        })
    }
}
