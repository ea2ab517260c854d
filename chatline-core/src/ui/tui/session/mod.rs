//! The chat session: owns every piece of widget state — the transcript, the
//! input buffer, the typing indicator, the clear-confirmation modal — and
//! routes all mutation through its methods.

use std::cmp::min;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::config::QuickAction;
use crate::config::constants::ui;
use crate::ui::tui::style::ratatui_style_from_ansi;
use crate::ui::tui::types::{MessageRole, SessionEvent};

mod input;
mod input_manager;
mod message;
mod messages;
mod modal;
mod spinner;

use self::input_manager::InputManager;
use self::message::ChatMessage;
use self::modal::{ClearConfirmModal, ConfirmOutcome};
use self::spinner::TypingSpinner;

pub struct Session {
    transcript: Vec<ChatMessage>,
    input: InputManager,
    spinner: TypingSpinner,
    modal: Option<ClearConfirmModal>,
    pending: bool,
    quick_actions: Vec<QuickAction>,
    /// Rows scrolled up from the bottom; 0 sticks to the newest entry.
    scroll_offset: usize,
    /// Scroll metrics captured at render time, used to clamp and page.
    last_max_scroll: usize,
    last_page_rows: u16,
}

impl Session {
    /// Create a session whose transcript starts with the welcome sentinel.
    pub fn new(welcome_message: &str, quick_actions: Vec<QuickAction>) -> Self {
        let mut session = Self {
            transcript: Vec::new(),
            input: InputManager::new(),
            spinner: TypingSpinner::new(),
            modal: None,
            pending: false,
            quick_actions,
            scroll_offset: 0,
            last_max_scroll: 0,
            last_page_rows: 0,
        };
        session.push_message(welcome_message, MessageRole::Bot);
        session
    }

    /// Whether a request is in flight (and the input surface disabled).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the typing placeholder is live.
    pub fn typing_active(&self) -> bool {
        self.spinner.is_active()
    }

    /// Whether the clear confirmation prompt is open.
    pub fn confirm_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Current input buffer content.
    pub fn input_content(&self) -> &str {
        self.input.content()
    }

    /// Replace the input buffer content (cursor moves to the end).
    pub fn set_input(&mut self, text: String) {
        self.input.set_content(text);
    }

    /// Route a terminal event; key presses are the only ones that matter.
    pub fn handle_event(&mut self, event: CrosstermEvent) -> Option<SessionEvent> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => self.process_key(key),
            _ => None,
        }
    }

    pub fn process_key(&mut self, key: KeyEvent) -> Option<SessionEvent> {
        if let Some(modal) = self.modal {
            if let Some(outcome) = modal.handle_key(key) {
                self.modal = None;
                if outcome == ConfirmOutcome::Confirmed {
                    self.clear_transcript();
                }
            }
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(SessionEvent::Exit),
                // The clear control stays live while a request is pending,
                // matching the rest of the widget chrome.
                KeyCode::Char('l') => {
                    self.modal = Some(ClearConfirmModal);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::PageUp => {
                let page = usize::from(self.last_page_rows.max(1));
                self.scroll_offset = min(self.scroll_offset + page, self.last_max_scroll);
                None
            }
            KeyCode::PageDown => {
                let page = usize::from(self.last_page_rows.max(1));
                self.scroll_offset = self.scroll_offset.saturating_sub(page);
                None
            }
            // Input surface is disabled for the duration of the request.
            _ if self.pending => None,
            KeyCode::Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                self.input.insert_newline();
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::ALT) => {
                self.activate_quick_action(ch)
            }
            KeyCode::Char(ch) => {
                self.input.insert_char(ch);
                None
            }
            KeyCode::Backspace => {
                self.input.backspace();
                None
            }
            KeyCode::Delete => {
                self.input.delete();
                None
            }
            KeyCode::Left => {
                self.input.move_left();
                None
            }
            KeyCode::Right => {
                self.input.move_right();
                None
            }
            KeyCode::Home => {
                self.input.move_home();
                None
            }
            KeyCode::End => {
                self.input.move_end();
                None
            }
            _ => None,
        }
    }

    /// Validate and submit the current input.
    ///
    /// Empty (after trimming) input is silently ignored. Otherwise the user
    /// message and the typing placeholder are appended before the event is
    /// handed to the loop, so both render ahead of the request dispatch.
    fn submit(&mut self) -> Option<SessionEvent> {
        let trimmed = self.input.content().trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.input.clear();
        self.push_message(&trimmed, MessageRole::User);
        self.show_typing();
        self.pending = true;
        Some(SessionEvent::Submit(trimmed))
    }

    /// Alt+1..Alt+9: populate the input with the preset and submit it.
    fn activate_quick_action(&mut self, ch: char) -> Option<SessionEvent> {
        let index = match ch.to_digit(10) {
            Some(digit @ 1..=9) => (digit - 1) as usize,
            _ => return None,
        };
        let message = self.quick_actions.get(index)?.message.clone();
        self.input.set_content(message);
        self.submit()
    }

    /// Advance the typing animation; returns true when a redraw is due.
    pub fn tick(&mut self) -> bool {
        self.spinner.update()
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let viewport = frame.area();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        // Auto-grow: the input area takes as many rows as its content needs,
        // bounded only by the screen itself.
        let content_rows = self.input_display_rows(viewport.width.saturating_sub(2));
        let max_content_rows = viewport.height.saturating_sub(4).max(1);
        let input_height = min(content_rows, max_content_rows) + 2;

        let chunks = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .split(viewport);

        self.render_transcript(frame, chunks[0]);
        self.render_input(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        if self.modal.is_some() {
            self.render_clear_modal(frame, viewport);
        }
    }

    fn render_transcript(&mut self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines: Vec<Line<'static>> = Vec::new();
        for (index, message) in self.transcript.iter().enumerate() {
            if index > 0 {
                for _ in 0..ui::MESSAGE_GAP_ROWS {
                    lines.push(Line::default());
                }
            }
            for (line_index, markup_line) in message.lines().iter().enumerate() {
                let mut spans: Vec<Span<'static>> = Vec::new();
                if message.role() == MessageRole::User {
                    if line_index == 0 {
                        spans.push(Span::styled(ui::USER_PREFIX, user_prefix_style()));
                    } else {
                        // Continuation lines align under the prefix.
                        spans.push(Span::raw("  "));
                    }
                }
                for segment in &markup_line.segments {
                    spans.push(Span::styled(
                        segment.text.clone(),
                        ratatui_style_from_ansi(segment.style),
                    ));
                }
                lines.push(Line::from(spans));
            }
        }

        if self.spinner.is_active() {
            for _ in 0..ui::MESSAGE_GAP_ROWS {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!("{} {}", self.spinner.frame(), ui::TYPING_LABEL),
                dim_style(),
            )));
        }

        let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        let total_rows = paragraph.line_count(area.width);
        let max_scroll = total_rows.saturating_sub(usize::from(area.height));

        self.scroll_offset = min(self.scroll_offset, max_scroll);
        self.last_max_scroll = max_scroll;
        self.last_page_rows = area.height;

        let scroll_top = (max_scroll - self.scroll_offset) as u16;
        frame.render_widget(paragraph.scroll((scroll_top, 0)), area);
    }

    fn render_footer(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }
        let shortcuts = self
            .quick_actions
            .iter()
            .take(9)
            .enumerate()
            .map(|(index, action)| format!("Alt+{} {}", index + 1, action.label))
            .collect::<Vec<_>>()
            .join(" · ");
        let mut hint = shortcuts;
        if !hint.is_empty() {
            hint.push_str("  |  ");
        }
        hint.push_str(ui::FOOTER_HINT);
        frame.render_widget(
            Paragraph::new(Span::styled(hint, dim_style())),
            area,
        );
    }
}

fn user_prefix_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}
