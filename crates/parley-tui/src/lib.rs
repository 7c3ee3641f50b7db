//! Full-screen conversation session page for parley.
//!
//! Elm-style: [`update::update`] is the only place state changes, the
//! runtime executes the effects it returns, and [`render::render`] draws
//! the state.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{
    composer, layout, messages, model, notice, session, sidebar, typing, viewport,
};
use parley_core::config::Config;
pub use runtime::{SharedStore, TuiRuntime};

/// Runs the interactive session page until the user quits.
pub async fn run_interactive_chat(config: Config, store: SharedStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("parley needs an interactive terminal.");
    }

    tracing::info!(
        breakpoint = config.mobile_breakpoint,
        theme = ?config.theme,
        "starting session"
    );
    let mut runtime = TuiRuntime::new(config, store)?;
    runtime.run()
}
