//! Transcript rendering and input parsing for the terminal chat.

use crossterm::style::Stylize;

use crate::copy::TYPING_INDICATOR;
use crate::models::{Message, Sender};

pub const BOT_LABEL: &str = "상담봇";
pub const USER_LABEL: &str = "나";

/// What a line typed at the prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Quit,
    Reset,
    /// A question, either typed or picked from the quick replies
    Ask(String),
    /// Nothing to do
    Empty,
}

/// Interpret a prompt line. A bare number picks the matching quick reply
/// (1-based); numbers out of range are sent as text.
pub fn parse_input(line: &str, quick_replies: &[String]) -> ConsoleInput {
    let line = line.trim();
    match line {
        "" => ConsoleInput::Empty,
        "/quit" | "/exit" => ConsoleInput::Quit,
        "/reset" => ConsoleInput::Reset,
        _ => match line.parse::<usize>() {
            Ok(n) if (1..=quick_replies.len()).contains(&n) => {
                ConsoleInput::Ask(quick_replies[n - 1].clone())
            }
            _ => ConsoleInput::Ask(line.to_string()),
        },
    }
}

/// Plain-text lines for one message: a header line, then the body, then
/// numbered quick replies.
pub fn message_lines(message: &Message) -> Vec<String> {
    let label = match message.sender {
        Sender::Bot => BOT_LABEL,
        Sender::User => USER_LABEL,
    };
    let mut lines = vec![format!("{} · {}", label, message.display_time())];
    lines.extend(message.text.lines().map(|line| format!("  {}", line)));
    lines.extend(
        message
            .quick_replies()
            .iter()
            .enumerate()
            .map(|(i, option)| format!("    {}. {}", i + 1, option)),
    );
    lines
}

/// Print a message with sender colouring.
pub fn print_message(message: &Message) {
    let lines = message_lines(message);
    let mut iter = lines.into_iter();
    if let Some(header) = iter.next() {
        match message.sender {
            Sender::Bot => println!("{}", header.cyan().bold()),
            Sender::User => println!("{}", header.green().bold()),
        }
    }
    for line in iter {
        println!("{}", line);
    }
    println!();
}

pub fn print_typing() {
    println!("{}", TYPING_INDICATOR.dark_grey().italic());
}

pub fn print_banner() {
    println!("{}", "번호로 선택 · /reset 새 상담 · /quit 종료".dark_grey());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::{GREETING, OPTIONS_PROMPT};
    use chrono::Utc;

    fn options() -> Vec<String> {
        vec!["배송 문의".to_string(), "반품 문의".to_string()]
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("  ", &[]), ConsoleInput::Empty);
        assert_eq!(parse_input("/quit", &[]), ConsoleInput::Quit);
        assert_eq!(parse_input("/reset\n", &[]), ConsoleInput::Reset);
    }

    #[test]
    fn test_parse_number_picks_quick_reply() {
        assert_eq!(
            parse_input("2", &options()),
            ConsoleInput::Ask("반품 문의".to_string())
        );
    }

    #[test]
    fn test_parse_out_of_range_number_is_text() {
        assert_eq!(parse_input("3", &options()), ConsoleInput::Ask("3".to_string()));
        assert_eq!(parse_input("0", &options()), ConsoleInput::Ask("0".to_string()));
        assert_eq!(parse_input("1", &[]), ConsoleInput::Ask("1".to_string()));
    }

    #[test]
    fn test_parse_text_is_trimmed() {
        assert_eq!(
            parse_input("  렌즈 세척은요? ", &options()),
            ConsoleInput::Ask("렌즈 세척은요?".to_string())
        );
    }

    #[test]
    fn test_greeting_lines() {
        let lines = message_lines(&Message::greeting(Utc::now()));
        assert!(lines[0].starts_with(BOT_LABEL));
        assert_eq!(lines[1], format!("  {}", GREETING));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_options_lines_are_numbered() {
        let message = Message::bot_options("2".to_string(), options(), Utc::now());
        let lines = message_lines(&message);
        assert_eq!(lines[1], format!("  {}", OPTIONS_PROMPT));
        assert_eq!(lines[2], "    1. 배송 문의");
        assert_eq!(lines[3], "    2. 반품 문의");
    }

    #[test]
    fn test_user_lines() {
        let message = Message::user_text("2".to_string(), "안녕".to_string(), Utc::now());
        let lines = message_lines(&message);
        assert!(lines[0].starts_with(USER_LABEL));
        assert_eq!(lines[1], "  안녕");
    }
}
