//! Session state value.

use chrono::{DateTime, Utc};

use crate::models::{Message, MessageKind};

/// Generation counter for a session's message list.
///
/// Every reset moves to the next epoch; replies tagged with an older epoch
/// belong to a superseded conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    pub fn next(self) -> Self {
        Epoch(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Whether a question is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingReply,
}

/// Everything the chat surface shows, as an immutable value.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    messages: Vec<Message>,
    phase: Phase,
    epoch: Epoch,
    /// Last question the user sent. Display only.
    last_question: Option<String>,
    next_id: u64,
}

impl SessionState {
    /// Fresh session holding only the greeting.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::seeded(Epoch::default(), now)
    }

    pub(crate) fn seeded(epoch: Epoch, now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![Message::greeting(now)],
            phase: Phase::Idle,
            epoch,
            last_question: None,
            next_id: 2,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    pub fn previous_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    /// A reset control is only worth offering once the user has said something.
    pub fn can_reset(&self) -> bool {
        self.messages.len() > 1
    }

    /// Options the user can pick, taken from the newest message only.
    pub fn quick_replies(&self) -> &[String] {
        match self.messages.last() {
            Some(message) if message.kind == MessageKind::Options => message.quick_replies(),
            _ => &[],
        }
    }

    pub(crate) fn allocate_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_last_question(&mut self, question: String) {
        self.last_question = Some(question);
    }
}
