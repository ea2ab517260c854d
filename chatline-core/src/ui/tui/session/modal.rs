//! Confirmation modal gating the destructive clear operation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::config::constants::ui;
use crate::ui::tui::style::measure_text_width;

use super::Session;

/// Yes/no prompt shown before the transcript is cleared.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ClearConfirmModal;

/// What a key press inside the modal resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

impl ClearConfirmModal {
    /// `y` confirms, `n` or Esc cancels, anything else is ignored.
    pub fn handle_key(&self, key: KeyEvent) -> Option<ConfirmOutcome> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(ConfirmOutcome::Confirmed),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(ConfirmOutcome::Cancelled)
            }
            _ => None,
        }
    }
}

impl Session {
    pub(super) fn render_clear_modal(&self, frame: &mut Frame<'_>, viewport: Rect) {
        let content_width = measure_text_width(ui::CLEAR_CONFIRM_PROMPT)
            .max(measure_text_width(ui::CLEAR_CONFIRM_HINT));
        let width = (content_width + 4).min(viewport.width);
        let height = 4u16.min(viewport.height);
        let area = centered_rect(viewport, width, height);

        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let lines = vec![
            Line::from(ui::CLEAR_CONFIRM_PROMPT),
            Line::from(Span::styled(
                ui::CLEAR_CONFIRM_HINT,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).centered().block(block), area);
    }
}

fn centered_rect(viewport: Rect, width: u16, height: u16) -> Rect {
    let x = viewport.x + viewport.width.saturating_sub(width) / 2;
    let y = viewport.y + viewport.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(viewport.width), height.min(viewport.height))
}
