//! Terminal lifecycle.
//!
//! Raw mode, the alternate screen, mouse capture and bracketed paste are
//! switched on together and switched off together: on drop of
//! [`TerminalSession`], and from the panic hook.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Backend = CrosstermBackend<Stdout>;

/// Owns the configured terminal. Restores it when dropped.
pub struct TerminalSession {
    terminal: Terminal<Backend>,
}

impl TerminalSession {
    /// Installs the panic hook, then enters raw mode and the alternate
    /// screen with mouse capture and bracketed paste.
    pub fn start() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableBracketedPaste,
            EnableMouseCapture
        )
        .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = restore_terminal() {
            tracing::warn!(%error, "failed to restore terminal");
        }
    }
}

/// Undoes everything [`TerminalSession::start`] enabled. Idempotent.
pub fn restore_terminal() -> Result<()> {
    // Mouse and paste must go before raw mode does.
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
