//! Input area rendering: auto-grown height, wrapping, and cursor placement.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::config::constants::ui;

use super::Session;

/// Wrapped input content plus where the cursor lands inside it.
struct InputLayout {
    rows: Vec<String>,
    cursor_row: u16,
    cursor_col: u16,
}

impl Session {
    /// Rows the input content needs at the given inner width. Drives the
    /// auto-grow layout; the empty buffer is the one-row baseline.
    pub(super) fn input_display_rows(&self, width: u16) -> u16 {
        layout_input(self.input.content(), self.input.cursor(), width)
            .rows
            .len() as u16
    }

    pub(super) fn render_input(&self, frame: &mut Frame<'_>, area: Rect) {
        let border_style = if self.pending {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            frame.render_widget(block, area);
            return;
        }

        let placeholder_style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);

        if self.pending {
            // Disabled surface: no cursor until the request settles.
            let text = Text::from(Line::styled(ui::PENDING_PLACEHOLDER, placeholder_style));
            frame.render_widget(Paragraph::new(text).block(block), area);
            return;
        }

        if self.input.is_empty() {
            let text = Text::from(Line::styled(ui::INPUT_PLACEHOLDER, placeholder_style));
            frame.render_widget(Paragraph::new(text).block(block), area);
            frame.set_cursor_position(Position::new(inner.x, inner.y));
            return;
        }

        let layout = layout_input(self.input.content(), self.input.cursor(), inner.width);
        // Keep the cursor row visible when content outgrows the clamped area.
        let scroll_top = layout
            .cursor_row
            .saturating_sub(inner.height.saturating_sub(1));
        let text = Text::from(
            layout
                .rows
                .iter()
                .map(|row| Line::raw(row.clone()))
                .collect::<Vec<_>>(),
        );
        frame.render_widget(Paragraph::new(text).scroll((scroll_top, 0)).block(block), area);
        frame.set_cursor_position(Position::new(
            inner.x + layout.cursor_col,
            inner.y + layout.cursor_row - scroll_top,
        ));
    }
}

/// Wrap `content` to `width` columns, breaking at explicit newlines and at
/// the column limit, and locate the cursor byte offset in the result.
fn layout_input(content: &str, cursor: usize, width: u16) -> InputLayout {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut col: u16 = 0;
    let mut cursor_pos: Option<(u16, u16)> = None;

    for (index, ch) in content.char_indices() {
        if ch == '\n' {
            if index == cursor {
                cursor_pos = Some((rows.len() as u16 - 1, col));
            }
            rows.push(String::new());
            col = 0;
            continue;
        }
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0).max(1) as u16;
        if col + ch_width > width {
            rows.push(String::new());
            col = 0;
        }
        if index == cursor {
            cursor_pos = Some((rows.len() as u16 - 1, col));
        }
        rows.last_mut().expect("at least one row").push(ch);
        col += ch_width;
    }

    let (cursor_row, cursor_col) = cursor_pos.unwrap_or((rows.len() as u16 - 1, col));
    InputLayout {
        rows,
        cursor_row,
        cursor_col,
    }
}
