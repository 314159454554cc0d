//! Shared types for the Tuni chat widget
//!
//! These types are used by both:
//! - the Dioxus web UI (WASM)
//! - host-side tests, which exercise the history rules without a browser
//!
//! Serializable with serde for JSON in local storage and over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Local storage key the conversation history lives under
pub const HISTORY_STORAGE_KEY: &str = "tuni_chat_history";

/// Maximum number of exchanges kept in history
pub const HISTORY_LIMIT: usize = 20;

/// Number of characters of the user message shown in a sidebar preview
pub const PREVIEW_CHAR_LIMIT: usize = 50;

// ============================================================================
// Core Types
// ============================================================================

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One user message and the bot reply (or error text) it produced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exchange {
    pub user: String,
    /// Older entries may lack this field; it reads back as empty
    #[serde(default)]
    pub bot: String,
    /// When the exchange was saved, not when the request was sent
    pub timestamp: DateTime<Utc>,
}

impl Exchange {
    pub fn new(user: impl Into<String>, bot: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
            timestamp,
        }
    }

    pub fn now(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self::new(user, bot, Utc::now())
    }
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Bounded, most-recent-first list of exchanges.
///
/// Only serializable; decoding goes through [`History::decode`] so the
/// length bound holds for anything read back from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History(Vec<Exchange>);

/// Result of reading a persisted history value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHistory {
    pub history: History,
    /// Array elements that were not valid exchanges and got dropped
    pub discarded: usize,
    /// The value was not a JSON array at all
    pub unreadable: bool,
}

impl History {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert at the front, dropping the oldest entry once the limit is
    /// exceeded. Returns the evicted exchange, if any.
    pub fn record(&mut self, exchange: Exchange) -> Option<Exchange> {
        self.0.insert(0, exchange);
        if self.0.len() > HISTORY_LIMIT {
            self.0.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Exchange> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exchange> {
        self.0.iter()
    }

    pub fn encode(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Decode a stored value, keeping every element that is a valid
    /// exchange. Non-array input yields an empty history.
    pub fn decode(raw: &str) -> DecodedHistory {
        let items = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => items,
            _ => {
                return DecodedHistory {
                    history: History::new(),
                    discarded: 0,
                    unreadable: true,
                }
            }
        };

        let total = items.len();
        let mut entries: Vec<Exchange> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        let discarded = total - entries.len();
        entries.truncate(HISTORY_LIMIT);

        DecodedHistory {
            history: History(entries),
            discarded,
            unreadable: false,
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Exchange;
    type IntoIter = std::slice::Iter<'a, Exchange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Backend Wire Types
// ============================================================================

/// Body POSTed to the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by the chat endpoint on a 2xx status
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Interpreted backend answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Reply(String),
    /// Application-level error payload; still a completed round trip
    Error(String),
}

impl ChatResponse {
    /// An empty `reply` falls through to `error`. `None` means the body
    /// carried neither and should be treated as malformed.
    pub fn interpret(self) -> Option<ChatReply> {
        match (self.reply.filter(|r| !r.is_empty()), self.error) {
            (Some(reply), _) => Some(ChatReply::Reply(reply)),
            (None, Some(error)) => Some(ChatReply::Error(error)),
            (None, None) => None,
        }
    }
}

impl ChatReply {
    /// Text shown in the transcript
    pub fn display_text(&self) -> String {
        match self {
            ChatReply::Reply(text) => text.clone(),
            ChatReply::Error(error) => format!("Error: {error}"),
        }
    }

    /// Text persisted as the exchange's bot half
    pub fn stored_text(&self) -> &str {
        match self {
            ChatReply::Reply(text) | ChatReply::Error(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exchange(n: usize) -> Exchange {
        Exchange::new(
            format!("question {n}"),
            format!("answer {n}"),
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::minutes(n as i64),
        )
    }

    fn filled(count: usize) -> History {
        let mut history = History::new();
        for n in 0..count {
            history.record(exchange(n));
        }
        history
    }

    #[test]
    fn test_record_places_newest_first() {
        let history = filled(3);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).unwrap().user, "question 2");
        assert_eq!(history.get(2).unwrap().user, "question 0");
    }

    #[test]
    fn test_record_length_is_bounded() {
        for start in 0..=HISTORY_LIMIT {
            let mut history = filled(start);
            let evicted = history.record(exchange(100));
            assert_eq!(history.len(), (start + 1).min(HISTORY_LIMIT));
            assert_eq!(history.get(0).unwrap().user, "question 100");
            assert_eq!(evicted.is_some(), start == HISTORY_LIMIT);
        }
    }

    #[test]
    fn test_full_history_evicts_oldest() {
        let mut history = filled(HISTORY_LIMIT);
        let oldest = history.get(HISTORY_LIMIT - 1).cloned().unwrap();

        let evicted = history.record(exchange(99));

        assert_eq!(evicted, Some(oldest.clone()));
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.get(0).unwrap().user, "question 99");
        assert!(!history.iter().any(|e| *e == oldest));
    }

    #[test]
    fn test_encode_decode_is_lossless() {
        let history = filled(5);
        let json = history.encode().unwrap();
        let decoded = History::decode(&json);
        assert_eq!(decoded.history, history);
        assert_eq!(decoded.discarded, 0);
        assert!(!decoded.unreadable);
    }

    #[test]
    fn test_decode_accepts_browser_iso_timestamps() {
        let raw = r#"[{"user":"Hello","bot":"Hi there!","timestamp":"2024-03-05T09:07:00.000Z"}]"#;
        let decoded = History::decode(raw);
        assert_eq!(decoded.history.len(), 1);
        assert_eq!(
            decoded.history.get(0).unwrap().timestamp,
            Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap()
        );
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        for raw in ["", "not json", "{\"user\":\"x\"}", "42"] {
            let decoded = History::decode(raw);
            assert!(decoded.history.is_empty());
            assert!(decoded.unreadable);
        }
    }

    #[test]
    fn test_decode_keeps_valid_entries() {
        let raw = r#"[
            {"user":"a","bot":"b","timestamp":"2024-01-01T00:00:00Z"},
            {"user":"missing bot","timestamp":"2024-01-01T00:00:00Z"},
            {"user":"c","bot":null,"timestamp":"2024-01-01T00:00:00Z"},
            {"user":"d","bot":"e","timestamp":"2024-01-02T00:00:00Z"}
        ]"#;
        let decoded = History::decode(raw);
        assert_eq!(decoded.discarded, 1);
        let users: Vec<_> = decoded.history.iter().map(|e| e.user.as_str()).collect();
        assert_eq!(users, ["a", "missing bot", "d"]);
    }

    #[test]
    fn test_decode_recovers_entries_without_bot() {
        let raw = r#"[{"user":"legacy","timestamp":"2024-01-01T00:00:00Z"}]"#;
        let decoded = History::decode(raw);
        assert_eq!(decoded.discarded, 0);
        let entry = decoded.history.get(0).unwrap();
        assert_eq!(entry.user, "legacy");
        assert_eq!(entry.bot, "");
    }

    #[test]
    fn test_decode_truncates_oversized_history() {
        let entries: Vec<Exchange> = (0..30).map(exchange).collect();
        let raw = serde_json::to_string(&entries).unwrap();
        let decoded = History::decode(&raw);
        assert_eq!(decoded.history.len(), HISTORY_LIMIT);
        assert_eq!(decoded.history.get(0).unwrap().user, "question 0");
    }

    #[test]
    fn test_chat_request_wire_format() {
        let json = serde_json::to_string(&ChatRequest {
            message: "Hello".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"Hello"}"#);
    }

    #[test]
    fn test_interpret_reply_and_error() {
        let reply: ChatResponse = serde_json::from_str(r#"{"reply":"Hi there!"}"#).unwrap();
        assert_eq!(reply.interpret(), Some(ChatReply::Reply("Hi there!".into())));

        let error: ChatResponse = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
        let error = error.interpret().unwrap();
        assert_eq!(error.display_text(), "Error: quota");
        assert_eq!(error.stored_text(), "quota");

        let empty_reply: ChatResponse =
            serde_json::from_str(r#"{"reply":"","error":"blank"}"#).unwrap();
        assert_eq!(empty_reply.interpret(), Some(ChatReply::Error("blank".into())));

        let neither: ChatResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(neither.interpret(), None);
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(Sender::User.as_str(), "user");
    }
}
