//! Chat session state machine
//!
//! Transitions are pure: [`transition`] takes the current [`SessionState`]
//! and a [`SessionEvent`] and returns the next state plus the [`Effect`]s the
//! driver has to run. Nothing here performs I/O.

mod effect;
mod event;
mod session_state;
mod transition;

pub use effect::Effect;
pub use event::SessionEvent;
pub use session_state::{Epoch, Phase, SessionState};
pub use transition::{accepts_reply, transition};
