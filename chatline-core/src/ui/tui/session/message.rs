//! Transcript entries.

use anstyle::Style as AnsiStyle;

use crate::ui::markup::{self, MarkupLine};
use crate::ui::tui::types::MessageRole;

/// One transcript message. Immutable once created: the raw content is kept
/// as received and the display form is rendered once at construction.
#[derive(Clone, Debug)]
pub(crate) struct ChatMessage {
    role: MessageRole,
    content: String,
    lines: Vec<MarkupLine>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: String, base_style: AnsiStyle) -> Self {
        let lines = markup::render_markup(&markup::format_message(&content), base_style);
        Self {
            role,
            content,
            lines,
        }
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    /// The raw, unformatted content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The rendered display lines.
    pub fn lines(&self) -> &[MarkupLine] {
        &self.lines
    }
}
