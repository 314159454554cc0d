// Chat widget CSS
pub const CHAT_STYLES: &str = r#"
:root {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --sidebar-bg: #f1f5f9;
    --border-color: #e2e8f0;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #94a3b8;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --bot-bubble-bg: #ffffff;
}

body.dark-mode {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --sidebar-bg: #111827;
    --border-color: #334155;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --bot-bubble-bg: #1e293b;
}

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

/* Layout */
.app-container {
    display: flex;
    height: 100vh;
    overflow: hidden;
}

.chat-main {
    position: relative;
    flex: 1;
    display: flex;
    flex-direction: column;
    min-width: 0;
}

/* Sidebar */
.sidebar {
    width: 16rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 1rem;
    background: var(--sidebar-bg);
    border-right: 1px solid var(--border-color);
    overflow-y: auto;
    flex-shrink: 0;
}

.sidebar.hidden {
    display: none;
}

.new-chat-button {
    padding: 0.5rem 0.75rem;
    background: var(--accent-bg);
    color: white;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
    font-weight: 600;
}

.history-heading {
    margin: 0.75rem 0 0.25rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    color: var(--text-muted);
}

.chat-history {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.history-item {
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    cursor: pointer;
}

.history-item:hover {
    background: var(--bg-secondary);
}

.history-preview {
    font-size: 0.875rem;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.history-time,
.empty-history,
.history-notice {
    font-size: 0.75rem;
    color: var(--text-muted);
}

/* Header */
.chat-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: var(--bg-secondary);
    border-bottom: 1px solid var(--border-color);
}

.chat-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
}

.icon-button {
    width: 2rem;
    height: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: transparent;
    color: var(--text-secondary);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    cursor: pointer;
}

/* Transcript */
.chat-messages {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem;
    overflow-y: auto;
    scroll-behavior: smooth;
}

.message-content {
    display: flex;
    gap: 0.75rem;
    max-width: 80%;
}

.user-message .message-content {
    margin-left: auto;
}

.bot-avatar {
    width: 2rem;
    height: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    flex-shrink: 0;
}

.message-text p {
    margin: 0;
    padding: 0.75rem 1rem;
    border-radius: 1rem;
    line-height: 1.5;
    word-wrap: break-word;
}

.user-message .message-text p {
    background: var(--accent-bg);
    color: white;
    border-bottom-right-radius: 0.25rem;
}

.bot-message .message-text p {
    background: var(--bot-bubble-bg);
    border: 1px solid var(--border-color);
    border-bottom-left-radius: 0.25rem;
}

/* Typing Indicator */
.typing-indicator {
    display: flex;
    gap: 0.25rem;
    padding: 1rem;
    background: var(--bot-bubble-bg);
    border: 1px solid var(--border-color);
    border-radius: 1rem;
    border-bottom-left-radius: 0.25rem;
}

.typing-dot {
    width: 0.5rem;
    height: 0.5rem;
    background: var(--text-muted);
    border-radius: 50%;
    animation: typing-bounce 1.4s infinite ease-in-out both;
}

.typing-dot:nth-child(1) { animation-delay: -0.32s; }
.typing-dot:nth-child(2) { animation-delay: -0.16s; }

@keyframes typing-bounce {
    0%, 80%, 100% { transform: scale(0); }
    40% { transform: scale(1); }
}

/* Input */
.chat-input-area {
    display: flex;
    gap: 0.5rem;
    align-items: flex-end;
    padding: 0.75rem 1rem;
    background: var(--bg-secondary);
    border-top: 1px solid var(--border-color);
}

.chat-textarea {
    flex: 1;
    padding: 0.75rem 1rem;
    background: var(--bg-primary);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: 1.5rem;
    font: inherit;
    resize: none;
    outline: none;
    max-height: 8rem;
}

.chat-textarea:focus {
    border-color: var(--accent-bg);
}

.send-button {
    width: 2.75rem;
    height: 2.75rem;
    background: var(--accent-bg);
    color: white;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    font-size: 1.25rem;
}

.send-button:hover:not(:disabled) {
    background: var(--accent-bg-hover);
}

.send-button:disabled {
    background: var(--border-color);
    color: var(--text-muted);
    cursor: not-allowed;
}

.new-chat-fab {
    position: absolute;
    right: 1.5rem;
    bottom: 9rem;
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    border: none;
    background: var(--accent-bg);
    color: white;
    font-size: 1.5rem;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
}

/* Bottom Navigation */
.bottom-nav {
    display: flex;
    justify-content: space-around;
    padding: 0.5rem 0;
    background: var(--bg-secondary);
    border-top: 1px solid var(--border-color);
}

.nav-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.125rem;
    background: none;
    border: none;
    color: var(--text-muted);
    cursor: pointer;
    font-size: 0.75rem;
}

.nav-item.active {
    color: var(--accent-bg);
}

.nav-icon {
    font-size: 1.25rem;
}

@media (max-width: 640px) {
    .sidebar {
        position: absolute;
        z-index: 10;
        height: 100%;
    }
}
"#;
