//! Single-flight submit/response cycle.
//!
//! `Idle -> Sending -> Idle`. The coordinator decides what the transcript
//! shows and what gets recorded; the view performs the I/O.

use tuni_types::{ChatReply, Exchange};

use crate::api::ApiError;
use crate::config::FALLBACK_ERROR_MESSAGE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Sending,
}

/// What to do once a request settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Bot text for the transcript
    pub display: String,
    /// Exchange to append to history; `None` for transport failures
    pub record: Option<Exchange>,
}

#[derive(Debug, Default)]
pub struct Coordinator {
    phase: Phase,
}

impl Coordinator {
    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Accept a submission. Returns the trimmed message and enters
    /// `Sending`, or `None` when the input is blank or a request is
    /// already in flight.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        if self.is_sending() {
            dioxus_logger::tracing::debug!("Ignoring submit while a request is in flight");
            return None;
        }

        self.phase = Phase::Sending;
        Some(message.to_string())
    }

    /// Settle the in-flight request and return to `Idle`
    pub fn finish(&mut self, user: &str, outcome: Result<ChatReply, ApiError>) -> Resolution {
        self.phase = Phase::Idle;

        match outcome {
            Ok(reply) => Resolution {
                display: reply.display_text(),
                record: Some(Exchange::now(user, reply.stored_text())),
            },
            Err(e) => {
                dioxus_logger::tracing::error!("Chat request failed: {}", e);
                Resolution {
                    display: FALLBACK_ERROR_MESSAGE.to_string(),
                    record: None,
                }
            }
        }
    }
}
