use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tuni_types::Sender;

use crate::api::send_chat_message;
use crate::config::{ChatConfig, NEW_CHAT_MESSAGE, WELCOME_MESSAGE};
use crate::coordinator::Coordinator;
use crate::history::{HistoryStore, LocalStorageBackend};
use crate::interop::scroll_to_bottom;
use crate::layout::{LayoutState, NavItem};
use crate::sidebar::{project, Preview, EMPTY_HISTORY_TEXT};
use crate::styles::CHAT_STYLES;
use crate::theme::{apply_theme_to_document, get_cached_theme_preference, set_cached_theme_preference};
use crate::transcript::{Transcript, TranscriptEntry};

const MESSAGES_ID: &str = "chat-messages";

#[component]
pub fn ChatApp() -> Element {
    let config = use_hook(ChatConfig::default);
    let storage_key = config.storage_key.clone();

    let mut store = use_signal(move || HistoryStore::load(LocalStorageBackend, storage_key));
    let mut transcript = use_signal(|| Transcript::with_greeting(WELCOME_MESSAGE));
    let mut coordinator = use_signal(Coordinator::default);
    let mut input_text = use_signal(String::new);
    let mut layout = use_signal(|| LayoutState {
        theme: get_cached_theme_preference().unwrap_or_default(),
        ..LayoutState::default()
    });

    // Keep <body> in sync with the theme flag
    use_effect(move || {
        apply_theme_to_document(layout.read().theme);
    });

    // Scroll once the newest entry is in the DOM
    use_effect(move || {
        let _latest = transcript.read().entries().last().map(|entry| entry.id);
        spawn(async move {
            TimeoutFuture::new(0).await;
            scroll_to_bottom(MESSAGES_ID);
        });
    });

    let submit = use_callback(move |_: ()| {
        let input = input_text.to_string();
        let Some(message) = coordinator.write().begin(&input) else {
            return;
        };

        input_text.set(String::new());
        let typing = {
            let mut transcript = transcript.write();
            transcript.render(Sender::User, &message);
            transcript.show_typing()
        };

        let config = config.clone();
        spawn(async move {
            dioxus_logger::tracing::info!("Sending chat message ({} chars)", message.chars().count());
            let outcome = send_chat_message(&config, &message).await;
            let resolution = coordinator.write().finish(&message, outcome);

            {
                let mut transcript = transcript.write();
                transcript.remove(typing);
                transcript.render(Sender::Bot, &resolution.display);
            }

            if let Some(exchange) = resolution.record {
                // Failures are logged by the store, which falls back to memory
                let _ = store.write().append(exchange);
            }
        });
    });

    let on_select = move |index: usize| {
        let exchange = store.read().history().get(index).cloned();
        match exchange {
            Some(exchange) => transcript.write().rehydrate(&exchange),
            None => dioxus_logger::tracing::warn!("No history entry at {}", index),
        }
    };

    let new_chat = use_callback(move |_: ()| {
        transcript.write().reset(NEW_CHAT_MESSAGE);
    });

    let on_toggle_theme = move |_: MouseEvent| {
        let theme = layout.write().toggle_theme();
        set_cached_theme_preference(theme);
    };

    let onkeydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            submit.call(());
        }
    };

    let previews = project(store.read().history());
    let degraded = store.read().is_degraded();
    let entries = transcript.read().entries().to_vec();
    let sending = coordinator.read().is_sending();
    let current = layout();

    rsx! {
        style { {CHAT_STYLES} }

        div {
            class: "app-container",

            HistorySidebar {
                previews,
                hidden: current.sidebar_hidden,
                degraded,
                on_select,
                on_new_chat: new_chat,
            }

            main {
                class: "chat-main",

                header {
                    class: "chat-header",
                    button {
                        class: "icon-button",
                        title: "Toggle sidebar",
                        onclick: move |_| layout.write().toggle_sidebar(),
                        "☰"
                    }
                    div {
                        class: "chat-title",
                        span { class: "chat-icon", "🤖" }
                        span { "Tuni" }
                    }
                    button {
                        class: "icon-button",
                        title: "Toggle dark mode",
                        onclick: on_toggle_theme,
                        if current.theme.is_dark() { "☀️" } else { "🌙" }
                    }
                }

                div {
                    id: MESSAGES_ID,
                    class: "chat-messages",
                    for entry in entries {
                        MessageBubble { key: "{entry.id}", entry: entry.clone() }
                    }
                }

                form {
                    id: "chat-form",
                    class: "chat-input-area",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        submit.call(());
                    },
                    textarea {
                        id: "user-input",
                        class: "chat-textarea",
                        placeholder: "Type a message...",
                        rows: "1",
                        value: "{input_text}",
                        disabled: sending,
                        oninput: move |e: FormEvent| input_text.set(e.value()),
                        onkeydown,
                    }
                    button {
                        r#type: "submit",
                        class: "send-button",
                        disabled: sending || input_text.read().trim().is_empty(),
                        if sending { "◐" } else { "➤" }
                    }
                }

                button {
                    class: "new-chat-fab",
                    title: "New chat",
                    onclick: move |_| new_chat.call(()),
                    "+"
                }

                BottomNav {
                    active: current.active_nav,
                    on_activate: move |item: NavItem| layout.write().activate(item),
                }
            }
        }
    }
}

#[component]
pub fn HistorySidebar(
    previews: Vec<Preview>,
    hidden: bool,
    degraded: bool,
    on_select: EventHandler<usize>,
    on_new_chat: EventHandler<()>,
) -> Element {
    rsx! {
        aside {
            class: if hidden { "sidebar hidden" } else { "sidebar" },

            button {
                class: "new-chat-button",
                onclick: move |_| on_new_chat.call(()),
                "+ New chat"
            }

            h3 { class: "history-heading", "Recent" }

            div {
                class: "chat-history",
                for preview in previews {
                    {match preview {
                        Preview::Empty => rsx! {
                            p { class: "empty-history", "{EMPTY_HISTORY_TEXT}" }
                        },
                        Preview::Entry { index, title, time } => rsx! {
                            div {
                                key: "{index}",
                                class: "history-item",
                                onclick: move |_| on_select.call(index),
                                div { class: "history-preview", "{title}" }
                                div { class: "history-time", "{time}" }
                            }
                        },
                    }}
                }
            }

            if degraded {
                p {
                    class: "history-notice",
                    "History can't be saved in this browser and will be lost when the page closes."
                }
            }
        }
    }
}

/// One transcript entry. Text goes into the DOM as text nodes only.
#[component]
pub fn MessageBubble(entry: TranscriptEntry) -> Element {
    let is_user = entry.sender == Sender::User;
    let lines: Vec<String> = entry.lines().into_iter().map(str::to_string).collect();

    rsx! {
        div {
            class: "{entry.sender.as_str()}-message message",
            div {
                class: "message-content",
                if !is_user {
                    div { class: "bot-avatar", "🤖" }
                }
                if entry.is_typing() {
                    TypingIndicator {}
                } else {
                    div {
                        class: "message-text",
                        p {
                            for (i, line) in lines.into_iter().enumerate() {
                                if i > 0 {
                                    br {}
                                }
                                "{line}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "typing-indicator",
            span { class: "typing-dot" }
            span { class: "typing-dot" }
            span { class: "typing-dot" }
        }
    }
}

#[component]
pub fn BottomNav(active: NavItem, on_activate: EventHandler<NavItem>) -> Element {
    rsx! {
        nav {
            class: "bottom-nav",
            for item in NavItem::ALL {
                button {
                    key: "{item.label()}",
                    class: if item == active { "nav-item active" } else { "nav-item" },
                    title: "{item.label()}",
                    onclick: move |_| on_activate.call(item),
                    span { class: "nav-icon", "{item.icon()}" }
                    span { class: "nav-label", "{item.label()}" }
                }
            }
        }
    }
}
