//! Centralized constants for defaults and UI strings.

/// Backend endpoint defaults and paths.
pub mod backend {
    /// Default base URL for the chat backend.
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

    /// Fixed path of the chat endpoint, relative to the base URL.
    pub const CHAT_PATH: &str = "/api/chat";

    /// Fixed path of the health endpoint, relative to the base URL.
    pub const HEALTH_PATH: &str = "/api/health";
}

/// User-facing fallback messages. The wording is part of the product
/// contract and is asserted in tests; do not edit casually.
pub mod messages {
    /// Shown when the backend answered but reported an error.
    pub const PROCESSING_ERROR_FALLBACK: &str =
        "Sorry, there was an error processing your request. Please try again.";

    /// Shown when the request never completed (transport failure or a body
    /// that did not parse as JSON).
    pub const CONNECTION_ERROR_FALLBACK: &str =
        "Sorry, there was an error connecting to the server. Please try again.";

    /// Default transcript sentinel shown before any exchange.
    pub const DEFAULT_WELCOME: &str =
        "Hello! I'm your assistant. How can I help you today?";
}

/// UI layout and copy constants.
pub mod ui {
    /// Prefix rendered before the first line of a user message.
    pub const USER_PREFIX: &str = "❯ ";

    /// Placeholder shown in the empty input area.
    pub const INPUT_PLACEHOLDER: &str = "Type your message...";

    /// Placeholder shown while a request is in flight and input is disabled.
    pub const PENDING_PLACEHOLDER: &str = "Waiting for reply...";

    /// Label rendered next to the typing indicator spinner.
    pub const TYPING_LABEL: &str = "typing...";

    /// Prompt shown by the clear-transcript confirmation modal.
    pub const CLEAR_CONFIRM_PROMPT: &str = "Are you sure you want to clear the chat history?";

    /// Key hints for the clear-transcript confirmation modal.
    pub const CLEAR_CONFIRM_HINT: &str = "[y] clear   [n] keep";

    /// Footer hint describing the core key bindings.
    pub const FOOTER_HINT: &str =
        "Enter send · Shift+Enter newline · Ctrl+L clear · PgUp/PgDn scroll · Ctrl+C quit";

    /// Milliseconds between typing-indicator animation frames.
    pub const SPINNER_INTERVAL_MS: u64 = 80;

    /// Milliseconds between event-loop ticks driving the spinner.
    pub const TICK_INTERVAL_MS: u64 = 80;

    /// Blank rows inserted between transcript messages.
    pub const MESSAGE_GAP_ROWS: usize = 1;
}

/// Default quick actions: preset messages bound to Alt+1..Alt+9.
pub mod quick_actions {
    /// `(label, message)` pairs used when the config file defines none.
    pub const DEFAULTS: &[(&str, &str)] = &[
        ("Help", "What can you help me with?"),
        ("Example", "Show me an example."),
        ("Feedback", "I want to give feedback."),
    ];
}
