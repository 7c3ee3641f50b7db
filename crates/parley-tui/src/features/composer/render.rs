use parley_core::conversations::ConversationId;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::ComposerState;
use crate::common::Palette;
use crate::common::text::tail_to_width;

/// Height of the composer including its border.
pub const COMPOSER_HEIGHT: u16 = 3;

pub fn render_composer(
    frame: &mut Frame,
    area: Rect,
    composer: &ComposerState,
    conversation_id: Option<&ConversationId>,
    palette: &Palette,
) {
    let title = match conversation_id {
        Some(_) if composer.is_sending() => " Sending… ",
        Some(_) => " Message ",
        None => " No conversation ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(Span::styled(title, palette.muted()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Leave one column for the cursor.
    let visible = tail_to_width(composer.draft(), inner.width.saturating_sub(1) as usize);
    let line = if composer.draft().is_empty() {
        let placeholder = if conversation_id.is_some() {
            "Type a message…"
        } else {
            "Ctrl+N starts a new chat"
        };
        Line::from(Span::styled(placeholder, palette.muted()))
    } else {
        Line::from(Span::styled(visible.to_string(), palette.text()))
    };
    frame.render_widget(Paragraph::new(line), inner);

    let cursor_x = inner.x + visible.width() as u16;
    frame.set_cursor_position(Position::new(
        cursor_x.min(inner.right().saturating_sub(1)),
        inner.y,
    ));
}
