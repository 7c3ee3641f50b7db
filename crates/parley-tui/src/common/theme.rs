//! Colors for the configured theme.

use parley_core::config::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Green,
                border: Color::DarkGray,
                error: Color::LightRed,
                highlight_bg: Color::Rgb(40, 48, 40),
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Rgb(22, 128, 61),
                border: Color::Gray,
                error: Color::Red,
                highlight_bg: Color::Rgb(220, 236, 222),
            },
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }
}
