//! Reply normalization.
//!
//! The answering service is asked for "short sentences as an array" but
//! nothing enforces that, so a reply may arrive as a decoded list, as a
//! JSON-encoded string, or as free text that only loosely resembles a list.
//! [`normalize`] reduces all of these to a [`NormalizedReply`]:
//!
//! 1. A list is used directly as the candidate list.
//! 2. A string is parsed as JSON; a JSON array becomes the candidate list,
//!    any other JSON value yields no candidates.
//! 3. A string that is not JSON is scanned for quoted runs
//!    (see [`QuotedRuns`]), which become the candidates.
//! 4. Every candidate is stripped of surrounding whitespace, quotes and
//!    brackets; empty results are discarded.
//! 5. Surviving candidates become `Options` in their original order.
//!    Otherwise the reply is `Text`: the raw string itself, or a fixed
//!    fallback when the raw reply was not a (non-blank) string.
//!
//! JSON embedded inside prose is not searched for; such input is handled
//! by the quoted-run scan.

mod quoted;
mod strip;

pub use quoted::{quoted_runs, QuotedRuns};
pub use strip::strip_decorations;

use strip::is_reply_whitespace;

use serde_json::Value;

use crate::copy;
use crate::models::{json_items_to_strings, NormalizedReply, RawReply};

/// Reduce a raw upstream reply to quick replies or a text message.
///
/// Total: every input maps to exactly one variant and nothing panics.
pub fn normalize(raw: &RawReply) -> NormalizedReply {
    let options: Vec<String> = candidates(raw)
        .iter()
        .map(|candidate| strip_decorations(candidate))
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect();

    if !options.is_empty() {
        tracing::debug!(count = options.len(), "reply normalized to options");
        return NormalizedReply::Options { options };
    }

    let text = match raw.as_text() {
        Some(text) if !text.trim_matches(is_reply_whitespace).is_empty() => text.to_string(),
        _ => copy::NOT_UNDERSTOOD.to_string(),
    };
    tracing::debug!("reply normalized to text");
    NormalizedReply::Text { text }
}

/// Unstripped candidates in upstream order.
fn candidates(raw: &RawReply) -> Vec<String> {
    match raw {
        RawReply::List(items) => items.clone(),
        RawReply::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => json_items_to_strings(items),
            Ok(_) => Vec::new(),
            Err(_) => quoted_runs(text).into_iter().map(str::to_string).collect(),
        },
        RawReply::Unknown => Vec::new(),
    }
}
