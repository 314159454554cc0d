use tuni_types::{Exchange, Sender};
use uuid::Uuid;

use crate::config::WELCOME_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    Text(String),
    Typing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub body: EntryBody,
}

impl TranscriptEntry {
    /// Text split at newlines; the view puts a line break between lines
    pub fn lines(&self) -> Vec<&str> {
        match &self.body {
            EntryBody::Text(text) => text.split('\n').collect(),
            EntryBody::Typing => Vec::new(),
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.body, EntryBody::Typing)
    }
}

/// Handle to a live typing placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingHandle(Uuid);

/// Ordered messages shown in the chat pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn with_greeting(text: &str) -> Self {
        let mut transcript = Self::default();
        transcript.render(Sender::Bot, text);
        transcript
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn render(&mut self, sender: Sender, text: &str) {
        self.entries.push(TranscriptEntry {
            id: Uuid::new_v4(),
            sender,
            body: EntryBody::Text(text.to_string()),
        });
    }

    pub fn show_typing(&mut self) -> TypingHandle {
        let id = Uuid::new_v4();
        self.entries.push(TranscriptEntry {
            id,
            sender: Sender::Bot,
            body: EntryBody::Typing,
        });
        TypingHandle(id)
    }

    /// Remove a typing placeholder. A handle whose entry is already gone,
    /// e.g. after a reset, is ignored.
    pub fn remove(&mut self, handle: TypingHandle) {
        self.entries.retain(|entry| entry.id != handle.0);
    }

    /// Clear everything and start over with a single bot greeting
    pub fn reset(&mut self, greeting: &str) {
        self.entries.clear();
        self.render(Sender::Bot, greeting);
    }

    /// Replace the transcript with a stored exchange under the welcome text
    pub fn rehydrate(&mut self, exchange: &Exchange) {
        self.reset(WELCOME_MESSAGE);
        self.render(Sender::User, &exchange.user);
        self.render(Sender::Bot, &exchange.bot);
    }
}
