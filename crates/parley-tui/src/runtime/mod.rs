//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the Elm runtime boundary. The reducer stays pure and returns
//! effects; store calls are spawned here and their results come back
//! through the inbox channel, which is drained once per loop iteration.

mod handlers;
mod inbox;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
pub use handlers::SharedStore;
use inbox::{UiEventReceiver, UiEventSender};
use parley_core::config::Config;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::TerminalSession;
use crate::{render, update};

/// Tick interval while something is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Tick interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

pub struct TuiRuntime {
    terminal: TerminalSession,
    pub state: AppState,
    store: SharedStore,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    pub fn new(config: Config, store: SharedStore) -> Result<Self> {
        let terminal = TerminalSession::start().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            state: AppState::new(config),
            store,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs until the user quits. Must be called inside a tokio runtime.
    pub fn run(&mut self) -> Result<()> {
        let effects = update::init(&mut self.state);
        self.execute_effects(effects);

        let mut dirty = true;
        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Size first, so a resize is seen before input queued behind it.
            let size = self.terminal.terminal_mut().size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if !matches!(event, UiEvent::Frame { .. }) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                let state = &self.state;
                self.terminal
                    .terminal_mut()
                    .draw(|frame| render::render(state, frame))?;
                dirty = false;
            }
        }
        tracing::info!("session ended");
        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let busy = self.state.session.is_creating() || self.state.tasks.is_any_running();
        let tick_interval = if busy {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }
        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        let store = Arc::clone(&self.store);
        match effect {
            UiEffect::Quit => self.state.should_quit = true,
            UiEffect::CreateConversation { seq, title } => {
                self.spawn_effect(handlers::conversation_create(store, seq, title));
            }
            UiEffect::LoadConversations { task } => {
                self.spawn_task(
                    TaskKind::ConversationList,
                    task,
                    handlers::conversation_list_load(store),
                );
            }
            UiEffect::LoadMessages {
                task,
                conversation_id,
            } => {
                self.spawn_task(
                    TaskKind::MessageLoad,
                    task,
                    handlers::messages_load(store, conversation_id),
                );
            }
            UiEffect::SendMessage {
                task,
                conversation_id,
                content,
            } => {
                self.spawn_task(
                    TaskKind::MessageSend,
                    task,
                    handlers::message_send(store, conversation_id, content),
                );
            }
        }
    }

    /// Spawns a handler and sends its event to the inbox as-is.
    fn spawn_effect<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(fut.await);
        });
    }

    /// Spawns a handler whose result is only applied if `id` is still the
    /// active task of its kind when it arrives.
    fn spawn_task<Fut>(&self, kind: TaskKind, id: TaskId, fut: Fut)
    where
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let completed = TaskCompleted {
                id,
                result: Box::new(fut.await),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }
}
