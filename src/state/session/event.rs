//! Inputs to the session state machine.

use crate::error::LensResult;
use crate::models::RawReply;

use super::session_state::Epoch;

/// Something that happened to a session.
#[derive(Debug)]
pub enum SessionEvent {
    /// User typed and sent a question
    Submit { text: String },
    /// User picked one of the offered quick replies
    SelectOption { text: String },
    /// The answering service finished a call made in `epoch`
    Reply {
        epoch: Epoch,
        outcome: LensResult<RawReply>,
    },
    /// User asked for a fresh conversation
    Reset,
}
