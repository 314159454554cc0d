use std::sync::OnceLock;
use std::time::Duration;

use tuni_types::HISTORY_STORAGE_KEY;

pub const WELCOME_MESSAGE: &str = "Hello! I'm Tuni, your AI assistant. How can I help you today?";
pub const NEW_CHAT_MESSAGE: &str = "New chat started! How can I assist you?";
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Runtime settings for the chat widget
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub api_base: String,
    pub chat_path: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub storage_key: String,
    pub request_timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: api_base().to_string(),
            chat_path: "/api/chat/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ChatConfig {
    pub fn chat_url(&self) -> String {
        join_url(&self.api_base, &self.chat_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Pick the API base for a page hostname.
/// - Build-time `TUNI_API_BASE` wins
/// - On localhost the backend dev server is assumed at port 8000
/// - Otherwise same origin
fn resolve_api_base(hostname: &str, override_base: Option<&str>) -> String {
    if let Some(base) = override_base.filter(|b| !b.is_empty()) {
        return base.to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        String::new()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE
        .get_or_init(|| {
            let hostname = web_sys::window()
                .and_then(|w| w.location().hostname().ok())
                .unwrap_or_default();
            resolve_api_base(&hostname, option_env!("TUNI_API_BASE"))
        })
        .as_str()
}
