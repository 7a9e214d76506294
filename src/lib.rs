//! lenschat - a lens retailer support chat
//!
//! The core is [`normalizer::normalize`], which turns whatever the answering
//! function sent back into either quick-reply options or plain text, and the
//! [`state::session`] state machine that a [`session::ChatSession`] drives.
//! [`server`] hosts the answering function itself.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod console;
pub mod copy;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod prelude;
pub mod server;
pub mod session;
pub mod state;
pub mod traits;
