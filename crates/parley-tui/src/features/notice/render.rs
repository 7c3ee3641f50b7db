use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{NoticeLevel, NoticeState};
use crate::common::Palette;
use crate::common::text::truncate_with_ellipsis;
use crate::session::SessionPhase;
use crate::viewport::ViewportMode;

/// One-row status line: the active notice if any, else the session phase.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    notices: &NoticeState,
    phase: SessionPhase<'_>,
    mode: ViewportMode,
    palette: &Palette,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let width = area.width as usize;
    let right = format!("{} ", mode.label());
    let left_width = width.saturating_sub(right.len() + 1);

    let left = match notices.current() {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Info => palette.accent(),
                NoticeLevel::Error => palette.error(),
            };
            Span::styled(truncate_with_ellipsis(&notice.text, left_width), style)
        }
        None => Span::styled(
            truncate_with_ellipsis(&phase_label(phase), left_width),
            palette.muted(),
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), left])), area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(right, palette.muted())))
            .alignment(Alignment::Right),
        area,
    );
}

fn phase_label(phase: SessionPhase<'_>) -> String {
    match phase {
        SessionPhase::Empty => "No conversation".to_string(),
        SessionPhase::Selected(id) => format!("Conversation {}", id.short()),
        SessionPhase::CreationPending { seq, .. } => format!("Creating conversation {seq}…"),
    }
}
