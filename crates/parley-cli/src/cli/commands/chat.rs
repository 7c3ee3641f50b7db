//! Chat command handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use parley_core::config::{Config, paths};
use parley_core::conversations::InMemoryConversationStore;
use parley_core::logging;
use parley_tui::SharedStore;

pub async fn run(config: Config) -> Result<()> {
    // Flushes buffered log lines when dropped at the end of the session.
    let _log_guard = logging::init(&config.log, &paths::logs_dir()).context("init logging")?;

    let store: SharedStore = Arc::new(
        InMemoryConversationStore::new().with_create_latency(config.store.create_latency()),
    );

    parley_tui::run_interactive_chat(config, store)
        .await
        .context("interactive chat failed")
}
