use parley_core::conversations::ConversationId;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use super::SidebarState;
use super::state::inner_area;
use crate::common::Palette;
use crate::common::text::truncate_with_ellipsis;

/// Preferred sidebar width including the border.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Draws the conversation list. `overlay` clears what's underneath first.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    sidebar: &SidebarState,
    current: Option<&ConversationId>,
    creating: bool,
    overlay: bool,
    palette: &Palette,
) {
    if overlay {
        frame.render_widget(Clear, area);
    }
    let title = format!(" Chats ({}) ", sidebar.conversations().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if overlay { palette.accent() } else { palette.border() })
        .title(Span::styled(title, palette.muted()));
    frame.render_widget(block, area);

    let inner = inner_area(area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let new_chat = if creating {
        "+ New chat (creating…)"
    } else {
        "+ New chat"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_with_ellipsis(new_chat, width),
            palette.accent(),
        ))),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let list_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    if list_area.height == 0 {
        return;
    }

    if sidebar.conversations().is_empty() {
        let text = match (sidebar.is_loaded(), sidebar.error()) {
            (_, Some(error)) => Span::styled(truncate_with_ellipsis(error, width), palette.error()),
            (false, None) => Span::styled("Loading…", palette.muted()),
            (true, None) => Span::styled("No conversations yet", palette.muted()),
        };
        frame.render_widget(Paragraph::new(Line::from(text)), list_area);
        return;
    }

    let selected = current.and_then(|id| sidebar.position(id));
    let offset = visible_offset(
        sidebar.list_offset.get(),
        selected,
        sidebar.conversations().len(),
        list_area.height as usize,
    );
    sidebar.list_offset.set(offset);

    let items: Vec<ListItem> = sidebar
        .conversations()
        .iter()
        .skip(offset)
        .take(list_area.height as usize)
        .map(|conversation| {
            let title = if conversation.title.trim().is_empty() {
                conversation.id.short().to_string()
            } else {
                conversation.title.clone()
            };
            ListItem::new(Line::from(Span::styled(
                truncate_with_ellipsis(&title, width.saturating_sub(2)),
                palette.text(),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            palette
                .text()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default();
    list_state.select(selected.map(|idx| idx - offset));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

/// Scroll offset that keeps the selected row on screen, moving as little as
/// possible from `previous`.
fn visible_offset(previous: usize, selected: Option<usize>, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let max_offset = len - height;
    let offset = previous.min(max_offset);
    match selected {
        Some(idx) if idx < offset => idx,
        Some(idx) if idx >= offset + height => idx + 1 - height,
        _ => offset,
    }
}

#[cfg(test)]
mod tests {
    use super::visible_offset;

    #[test]
    fn test_offset_follows_selection() {
        assert_eq!(visible_offset(0, Some(2), 3, 5), 0);
        assert_eq!(visible_offset(0, Some(7), 10, 5), 3);
        assert_eq!(visible_offset(3, Some(1), 10, 5), 1);
        assert_eq!(visible_offset(3, Some(4), 10, 5), 3);
    }

    #[test]
    fn test_offset_clamps_when_list_shrinks() {
        assert_eq!(visible_offset(8, None, 10, 5), 5);
        assert_eq!(visible_offset(8, None, 4, 5), 0);
    }
}
