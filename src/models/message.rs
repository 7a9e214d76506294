use chrono::{DateTime, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::copy;

/// Who authored a message in the transcript
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// How a message is presented
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text bubble
    Text,
    /// Bubble followed by selectable quick replies
    Options,
}

/// A single entry in the chat transcript.
///
/// Messages are never edited after creation; the transcript only grows,
/// except on reset where it is replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique within the transcript that holds it
    pub id: String,
    /// Text shown in the bubble
    pub text: String,
    pub sender: Sender,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    /// Quick replies, present only for `MessageKind::Options`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Message {
    /// Id reserved for the seeded greeting.
    pub const GREETING_ID: &'static str = "1";

    /// The bot greeting every session starts with.
    pub fn greeting(timestamp: DateTime<Utc>) -> Self {
        Self::bot_text(Self::GREETING_ID.to_string(), copy::GREETING.to_string(), timestamp)
    }

    /// A plain text message from the user.
    pub fn user_text(id: String, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            sender: Sender::User,
            timestamp,
            kind: MessageKind::Text,
            options: None,
        }
    }

    /// A plain text message from the bot.
    pub fn bot_text(id: String, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            sender: Sender::Bot,
            timestamp,
            kind: MessageKind::Text,
            options: None,
        }
    }

    /// A bot message offering quick replies under the fixed prompt.
    pub fn bot_options(id: String, options: Vec<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: copy::OPTIONS_PROMPT.to_string(),
            sender: Sender::Bot,
            timestamp,
            kind: MessageKind::Options,
            options: Some(options),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Quick replies carried by this message, empty for text messages.
    pub fn quick_replies(&self) -> &[String] {
        match (&self.kind, &self.options) {
            (MessageKind::Options, Some(options)) => options.as_slice(),
            _ => &[],
        }
    }

    /// Local wall-clock time in the Korean 12-hour style, e.g. `오후 03:07`.
    pub fn display_time(&self) -> String {
        let local = self.timestamp.with_timezone(&Local);
        format_korean_time(local.hour(), local.minute())
    }
}

/// Format an hour/minute pair as `오전|오후 hh:mm`.
pub fn format_korean_time(hour: u32, minute: u32) -> String {
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {:02}:{:02}", meridiem, hour12, minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_uses_reserved_id() {
        let msg = Message::greeting(Utc::now());
        assert_eq!(msg.id, "1");
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.text, copy::GREETING);
        assert!(msg.options.is_none());
    }

    #[test]
    fn test_bot_options_carries_prompt() {
        let msg = Message::bot_options(
            "7".to_string(),
            vec!["A".to_string(), "B".to_string()],
            Utc::now(),
        );
        assert_eq!(msg.kind, MessageKind::Options);
        assert_eq!(msg.text, copy::OPTIONS_PROMPT);
        assert_eq!(msg.quick_replies(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_text_message_has_no_quick_replies() {
        let msg = Message::user_text("2".to_string(), "hi".to_string(), Utc::now());
        assert!(msg.is_user());
        assert!(msg.quick_replies().is_empty());
    }

    #[test]
    fn test_format_korean_time() {
        assert_eq!(format_korean_time(0, 5), "오전 12:05");
        assert_eq!(format_korean_time(9, 30), "오전 09:30");
        assert_eq!(format_korean_time(12, 0), "오후 12:00");
        assert_eq!(format_korean_time(15, 7), "오후 03:07");
        assert_eq!(format_korean_time(23, 59), "오후 11:59");
    }

    #[test]
    fn test_message_serialization_skips_missing_options() {
        let msg = Message::user_text("2".to_string(), "배송 문의".to_string(), Utc::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        assert_eq!(json["kind"], "text");
        assert!(json.get("options").is_none());
    }
}
