//! Side effects requested by the session state machine.

use super::session_state::Epoch;

/// Work the driver must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `message` to the answering service; tag the reply with `epoch`.
    Ask { epoch: Epoch, message: String },
}
