use chrono::Local;
use parley_core::conversations::{Message, Role};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{MessageView, MessagesState};
use crate::common::Palette;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub fn render_messages(
    frame: &mut Frame,
    area: Rect,
    messages: &MessagesState,
    is_typing: bool,
    spinner_frame: usize,
    palette: &Palette,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines: Vec<Line<'static>> = match messages.view() {
        MessageView::NoConversation => vec![
            Line::from(Span::styled("No conversation selected.", palette.muted())),
            Line::from(Span::styled(
                "Pick one from the sidebar or press Ctrl+N.",
                palette.muted(),
            )),
        ],
        MessageView::Loading => vec![Line::from(Span::styled(
            format!("{} Loading messages…", SPINNER[spinner_frame % SPINNER.len()]),
            palette.muted(),
        ))],
        MessageView::NotFound => vec![Line::from(Span::styled(
            "Conversation not found",
            palette.error(),
        ))],
        MessageView::Failed(error) => vec![Line::from(Span::styled(
            format!("Failed to load messages: {error}"),
            palette.error(),
        ))],
        MessageView::Loaded(list) if list.is_empty() => vec![Line::from(Span::styled(
            "No messages yet. Say hello.",
            palette.muted(),
        ))],
        MessageView::Loaded(list) => list
            .iter()
            .flat_map(|message| message_lines(message, palette))
            .collect(),
    };

    if is_typing {
        lines.push(Line::from(Span::styled("typing…", palette.muted())));
    }

    // Bottom-anchored: keep the newest lines visible.
    let overflow = lines.len().saturating_sub(area.height as usize);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn message_lines(message: &Message, palette: &Palette) -> Vec<Line<'static>> {
    let (label, label_style) = match message.role {
        Role::User => ("you", palette.accent()),
        Role::Assistant => ("assistant", palette.text()),
    };
    let time = message
        .created_at
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();
    let mut lines = vec![Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(format!(" · {time}"), palette.muted()),
    ])];
    lines.extend(
        message
            .content
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), palette.text()))),
    );
    lines.push(Line::default());
    lines
}
