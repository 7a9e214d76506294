//! Async driver around the session state machine.
//!
//! [`ChatSession`] owns the current [`SessionState`], runs the effects that
//! transitions request and feeds answers back in as events tagged with the
//! epoch they were asked in.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::models::Message;
use crate::state::session::{accepts_reply, transition, Effect, SessionEvent, SessionState};
use crate::traits::AnswerService;

/// One chat conversation bound to an answering service.
///
/// Must be used inside a tokio runtime: accepted questions are sent on a
/// spawned task and their replies are picked up with [`next_reply`].
///
/// [`next_reply`]: ChatSession::next_reply
pub struct ChatSession {
    state: SessionState,
    service: Arc<dyn AnswerService>,
    reply_tx: mpsc::UnboundedSender<SessionEvent>,
    reply_rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl ChatSession {
    pub fn new(service: Arc<dyn AnswerService>) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(Utc::now()),
            service,
            reply_tx,
            reply_rx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        self.state.messages()
    }

    /// Send a question. Returns false when it was rejected (blank, or a
    /// reply is still pending).
    pub fn submit(&mut self, text: &str) -> bool {
        self.dispatch(SessionEvent::Submit {
            text: text.to_string(),
        })
    }

    /// Pick an offered quick reply.
    pub fn select_option(&mut self, text: &str) -> bool {
        self.dispatch(SessionEvent::SelectOption {
            text: text.to_string(),
        })
    }

    /// Start over with just the greeting. Replies still in flight are
    /// discarded when they arrive.
    pub fn reset(&mut self) {
        self.dispatch(SessionEvent::Reset);
    }

    /// Wait for the next reply and apply it.
    ///
    /// Returns true when the reply was added to the transcript, false when it
    /// belonged to a conversation that has since been reset. Waits
    /// indefinitely if no question is in flight.
    pub async fn next_reply(&mut self) -> bool {
        match self.reply_rx.recv().await {
            Some(event) => self.apply_reply(event),
            None => false,
        }
    }

    /// Apply every reply that has already arrived. Returns how many were
    /// added to the transcript.
    pub fn drain_replies(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.reply_rx.try_recv() {
            if self.apply_reply(event) {
                applied += 1;
            }
        }
        applied
    }

    fn apply_reply(&mut self, event: SessionEvent) -> bool {
        let current = match &event {
            SessionEvent::Reply { epoch, .. } => accepts_reply(&self.state, *epoch),
            _ => false,
        };
        self.dispatch(event);
        current
    }

    /// Run one transition and its effects. Returns true if any effect ran.
    fn dispatch(&mut self, event: SessionEvent) -> bool {
        let (next, effects) = transition(&self.state, event, Utc::now());
        self.state = next;
        let accepted = !effects.is_empty();
        for effect in effects {
            self.run(effect);
        }
        accepted
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Ask { epoch, message } => {
                let service = Arc::clone(&self.service);
                let reply_tx = self.reply_tx.clone();
                tokio::spawn(async move {
                    let outcome = service.ask(&message).await;
                    // Receiver gone means the session was dropped.
                    let _ = reply_tx.send(SessionEvent::Reply { epoch, outcome });
                });
            }
        }
    }
}
