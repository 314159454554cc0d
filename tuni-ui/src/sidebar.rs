use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use tuni_types::{History, PREVIEW_CHAR_LIMIT};

pub const EMPTY_HISTORY_TEXT: &str = "No chat history yet";

/// One row in the history sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Shown instead of an empty list
    Empty,
    Entry {
        /// Position in the history, used to look the exchange up on click
        index: usize,
        title: String,
        time: String,
    },
}

/// First [`PREVIEW_CHAR_LIMIT`] characters, with `...` when cut
pub fn preview_text(user: &str) -> String {
    match user.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((cut, _)) => format!("{}...", &user[..cut]),
        None => user.to_string(),
    }
}

pub fn format_time_of_day<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// Previews in the browser's local time
pub fn project(history: &History) -> Vec<Preview> {
    project_in(history, &Local)
}

pub fn project_in<Tz>(history: &History, tz: &Tz) -> Vec<Preview>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if history.is_empty() {
        return vec![Preview::Empty];
    }

    history
        .iter()
        .enumerate()
        .map(|(index, exchange)| Preview::Entry {
            index,
            title: preview_text(&exchange.user),
            time: format_time_of_day(exchange.timestamp, tz),
        })
        .collect()
}
