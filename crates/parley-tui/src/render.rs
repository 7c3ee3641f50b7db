//! Pure view functions for the TUI.
//!
//! Rendering reads `&AppState` and draws to a ratatui frame. The only writes
//! are the hit-test rects kept in `Cell`s, which the reducer reads when the
//! next pointer event arrives.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::text::truncate_with_ellipsis;
use crate::composer::{COMPOSER_HEIGHT, render_composer};
use crate::layout::SidebarPresentation;
use crate::messages::render_messages;
use crate::notice::render_status_line;
use crate::sidebar::{SIDEBAR_WIDTH, render_sidebar};
use crate::state::AppState;
use crate::viewport::ViewportMode;

const TOGGLE_HINT: &str = " ☰ Ctrl+B ";

/// Columns reserved for " parley " and a short title before the model label.
const MIN_TITLE_WIDTH: u16 = 20;

/// Horizontal padding around the message pane.
const MESSAGE_MARGIN: u16 = 1;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let mode = app.viewport.mode();
    let presentation = app.layout.presentation(mode);

    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header, mode);

    let main = if presentation == SidebarPresentation::Inline {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body);
        draw_sidebar(app, frame, sidebar, false);
        main
    } else {
        body
    };

    let [messages, composer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(COMPOSER_HEIGHT)]).areas(main);
    render_messages(
        frame,
        Rect::new(
            messages.x.saturating_add(MESSAGE_MARGIN),
            messages.y,
            messages.width.saturating_sub(MESSAGE_MARGIN * 2),
            messages.height,
        ),
        &app.messages,
        app.typing.is_active(),
        app.spinner_frame,
        &app.palette,
    );
    render_composer(
        frame,
        composer,
        &app.composer,
        app.session.current(),
        &app.palette,
    );
    render_status_line(
        frame,
        status,
        &app.notice,
        app.session.phase(),
        mode,
        &app.palette,
    );

    match presentation {
        SidebarPresentation::Inline => {}
        // Drawn last so it covers the message pane.
        SidebarPresentation::Overlay => {
            let width = SIDEBAR_WIDTH.min(body.width.saturating_sub(4));
            draw_sidebar(
                app,
                frame,
                Rect::new(body.x, body.y, width, body.height),
                true,
            );
        }
        SidebarPresentation::Hidden => app.layout.sidebar_area.set(Rect::default()),
    }
}

fn draw_sidebar(app: &AppState, frame: &mut Frame, area: Rect, overlay: bool) {
    app.layout.sidebar_area.set(area);
    render_sidebar(
        frame,
        area,
        &app.sidebar,
        app.session.current(),
        app.session.is_creating(),
        overlay,
        &app.palette,
    );
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect, mode: ViewportMode) {
    let palette = &app.palette;

    // The toggle hint only exists on narrow layouts.
    let hint_width = if mode.is_mobile() {
        (TOGGLE_HINT.width() as u16).min(area.width)
    } else {
        0
    };
    let hint_area = Rect::new(
        area.right().saturating_sub(hint_width),
        area.y,
        hint_width,
        area.height.min(1),
    );
    app.layout.toggle_area.set(hint_area);

    let title = match app.session.current() {
        Some(id) => app
            .sidebar
            .conversations()
            .iter()
            .find(|conversation| &conversation.id == id)
            .map(|conversation| conversation.title.clone())
            .unwrap_or_else(|| id.short().to_string()),
        None => "No conversation".to_string(),
    };
    let model_label = app
        .model
        .current()
        .map(|model| format!(" {model} "))
        .unwrap_or_default();
    // The title keeps at least a few columns; the model label goes first.
    let model_width = (model_label.width() as u16)
        .min(area.width.saturating_sub(hint_width).saturating_sub(MIN_TITLE_WIDTH));
    let model_area = Rect::new(
        hint_area.x.saturating_sub(model_width),
        area.y,
        model_width,
        area.height.min(1),
    );

    let available = area.width.saturating_sub(hint_width + model_width) as usize;
    let line = Line::from(vec![
        Span::styled(" parley ", palette.accent()),
        Span::styled(
            truncate_with_ellipsis(&title, available.saturating_sub(9)),
            palette.text(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if model_width > 0 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_with_ellipsis(&model_label, model_width as usize),
                palette.muted(),
            )))
            .alignment(Alignment::Right),
            model_area,
        );
    }

    if hint_width > 0 {
        let style = if app.layout.sidebar_open() {
            palette.accent()
        } else {
            palette.muted()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(TOGGLE_HINT, style)))
                .alignment(Alignment::Right),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use parley_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::events::{ListEvent, UiEvent};
    use crate::update::update;

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_at(width: u16) -> AppState {
        let mut app = AppState::new(Config::default());
        update(&mut app, UiEvent::Frame { width, height: 24 });
        app
    }

    #[test]
    fn test_desktop_draws_sidebar_inline() {
        let app = app_at(120);
        let screen = draw(&app, 120, 24);

        assert!(screen.contains("+ New chat"));
        assert!(!screen.contains("Ctrl+B"));
        assert_eq!(app.layout.sidebar_area.get().width, SIDEBAR_WIDTH);
        assert_eq!(app.layout.toggle_area.get(), Rect::new(120, 0, 0, 1));
    }

    #[test]
    fn test_mobile_hides_sidebar_until_toggled() {
        let mut app = app_at(60);
        let screen = draw(&app, 60, 24);
        assert!(!screen.contains("+ New chat"));
        assert!(screen.contains("Ctrl+B"));
        assert_eq!(app.layout.sidebar_area.get(), Rect::default());

        app.layout.toggle();
        let screen = draw(&app, 60, 24);
        assert!(screen.contains("+ New chat"));
        assert_eq!(app.layout.sidebar_area.get().width, SIDEBAR_WIDTH);
    }

    #[test]
    fn test_status_line_shows_pending_creation() {
        let mut app = app_at(120);
        update(&mut app, UiEvent::List(ListEvent::NewChat));

        let screen = draw(&app, 120, 24);

        assert!(screen.contains("Creating conversation #1"));
    }

    #[test]
    fn test_header_shows_selected_model() {
        let mut app = app_at(120);
        let screen = draw(&app, 120, 24);
        let header = screen.lines().next().unwrap_or_default();
        assert!(header.contains("GPT-4o Vision (Unrestricted)"));

        app.model.cycle();
        let screen = draw(&app, 120, 24);
        let header = screen.lines().next().unwrap_or_default();
        assert!(header.contains("GPT-4 Turbo"));
        assert!(header.contains("No conversation"));
    }
}
