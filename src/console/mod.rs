//! Line-oriented terminal chat.
//!
//! Reads questions from stdin and prints the transcript of a
//! [`ChatSession`] to stdout as it grows.

pub mod render;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::adapters::{EdgeFunctionClient, ReqwestHttpClient};
use crate::config::ClientConfig;
use crate::error::LensResult;
use crate::session::ChatSession;
use crate::state::Epoch;
use crate::traits::AnswerService;

pub use render::{message_lines, parse_input, ConsoleInput};

/// Tracks which messages have already been printed.
struct Printed {
    epoch: Epoch,
    count: usize,
}

impl Printed {
    fn new() -> Self {
        Self {
            epoch: Epoch::default(),
            count: 0,
        }
    }

    /// Print anything new since the last call. A reset reprints from the top.
    fn flush(&mut self, chat: &ChatSession) {
        let state = chat.state();
        if state.epoch() != self.epoch {
            self.epoch = state.epoch();
            self.count = 0;
            println!();
        }
        for message in &state.messages()[self.count..] {
            render::print_message(message);
        }
        self.count = state.messages().len();
        if state.is_awaiting_reply() {
            render::print_typing();
        }
    }
}

/// Run the chat against the configured answering function.
pub async fn run_chat(config: &ClientConfig) -> LensResult<()> {
    let http = Arc::new(ReqwestHttpClient::new());
    let service = Arc::new(EdgeFunctionClient::new(http, config));
    tracing::debug!(url = %service.url(), "starting chat");
    run_with(service).await
}

/// Run the chat against any answering service until stdin closes or the
/// user quits.
pub async fn run_with(service: Arc<dyn AnswerService>) -> LensResult<()> {
    let mut chat = ChatSession::new(service);
    let mut printed = Printed::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render::print_banner();
    printed.flush(&chat);

    loop {
        let awaiting = chat.state().is_awaiting_reply();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line, chat.state().quick_replies()) {
                    ConsoleInput::Quit => break,
                    ConsoleInput::Empty => continue,
                    ConsoleInput::Reset => {
                        if chat.state().can_reset() {
                            chat.reset();
                        }
                    }
                    ConsoleInput::Ask(text) => {
                        if !chat.submit(&text) {
                            render::print_typing();
                            continue;
                        }
                    }
                }
                printed.flush(&chat);
            }
            applied = chat.next_reply(), if awaiting => {
                if applied {
                    printed.flush(&chat);
                }
            }
        }
    }

    Ok(())
}
