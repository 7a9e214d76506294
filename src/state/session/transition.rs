//! Pure session transitions.

use chrono::{DateTime, Utc};

use crate::copy::GENERIC_ERROR;
use crate::models::{Message, NormalizedReply};
use crate::normalizer::normalize;

use super::effect::Effect;
use super::event::SessionEvent;
use super::session_state::{Epoch, Phase, SessionState};

/// Apply `event` to `state`, returning the next state and the effects to run.
///
/// Rejected events return an identical state and no effects.
pub fn transition(
    state: &SessionState,
    event: SessionEvent,
    now: DateTime<Utc>,
) -> (SessionState, Vec<Effect>) {
    match event {
        SessionEvent::Submit { text } | SessionEvent::SelectOption { text } => {
            submit(state, &text, now)
        }
        SessionEvent::Reply { epoch, outcome } => {
            if !accepts_reply(state, epoch) {
                tracing::warn!(
                    reply_epoch = epoch.value(),
                    current_epoch = state.epoch().value(),
                    "discarding stale reply"
                );
                return (state.clone(), Vec::new());
            }
            let reply = match outcome {
                Ok(raw) => normalize(&raw),
                Err(err) => {
                    tracing::warn!(code = err.error_code(), error = %err, "answering service failed");
                    NormalizedReply::Text {
                        text: GENERIC_ERROR.to_string(),
                    }
                }
            };
            (receive(state, reply, now), Vec::new())
        }
        SessionEvent::Reset => {
            let epoch = state.epoch().next();
            tracing::debug!(epoch = epoch.value(), "session reset");
            (SessionState::seeded(epoch, now), Vec::new())
        }
    }
}

/// True when a reply from `epoch` belongs to the question `state` is waiting on.
pub fn accepts_reply(state: &SessionState, epoch: Epoch) -> bool {
    state.is_awaiting_reply() && state.epoch() == epoch
}

fn submit(state: &SessionState, text: &str, now: DateTime<Utc>) -> (SessionState, Vec<Effect>) {
    let question = text.trim();
    if question.is_empty() || state.is_awaiting_reply() {
        return (state.clone(), Vec::new());
    }

    let mut next = state.clone();
    let id = next.allocate_id();
    next.push(Message::user_text(id, question.to_string(), now));
    next.set_last_question(question.to_string());
    next.set_phase(Phase::AwaitingReply);
    tracing::debug!(epoch = next.epoch().value(), "question submitted");

    let effect = Effect::Ask {
        epoch: next.epoch(),
        message: question.to_string(),
    };
    (next, vec![effect])
}

fn receive(state: &SessionState, reply: NormalizedReply, now: DateTime<Utc>) -> SessionState {
    let mut next = state.clone();
    let id = next.allocate_id();
    let message = match reply {
        NormalizedReply::Options { options } => Message::bot_options(id, options, now),
        NormalizedReply::Text { text } => Message::bot_text(id, text, now),
    };
    next.push(message);
    next.set_phase(Phase::Idle);
    next
}
