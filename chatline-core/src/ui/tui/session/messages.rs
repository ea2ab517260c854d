//! Transcript operations for [`Session`].

use anstyle::Style as AnsiStyle;

use crate::ui::tui::types::MessageRole;

use super::{ChatMessage, Session};

impl Session {
    /// Format and append a message, then snap the view to the newest entry.
    pub fn push_message(&mut self, content: &str, role: MessageRole) {
        self.transcript
            .push(ChatMessage::new(role, content.to_string(), AnsiStyle::new()));
        self.scroll_offset = 0;
    }

    /// Show the typing placeholder at the end of the visual container.
    /// Callers must not call twice without an intervening [`Self::hide_typing`];
    /// the single spinner state makes a second instance impossible anyway.
    pub(super) fn show_typing(&mut self) {
        self.spinner.start();
        self.scroll_offset = 0;
    }

    /// Remove the typing placeholder; no-op when absent.
    pub(super) fn hide_typing(&mut self) {
        self.spinner.stop();
    }

    /// Resolve the in-flight request: drop the placeholder, append the reply
    /// when there is one, and re-enable the input surface. The loop delivers
    /// exactly one completion per dispatched request, so this runs on every
    /// path, success or failure.
    pub fn finish_request(&mut self, reply: Option<String>) {
        self.hide_typing();
        if let Some(text) = reply {
            self.push_message(&text, MessageRole::Bot);
        }
        self.pending = false;
    }

    /// Remove every message except the first (the welcome sentinel).
    pub(super) fn clear_transcript(&mut self) {
        self.transcript.truncate(1);
        self.scroll_offset = 0;
    }

    /// The ordered transcript, oldest first.
    pub(crate) fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Observable transcript: `(role, raw content)` pairs, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = (MessageRole, &str)> + '_ {
        self.transcript
            .iter()
            .map(|message| (message.role(), message.content()))
    }
}
