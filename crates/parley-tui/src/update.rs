//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! The reducer is the session page's orchestrator: it routes list and
//! composer events to the component that owns the affected state, applies
//! the narrow-layout autocollapse rule after navigation, and keeps the
//! typing relay and composer fresh whenever the current conversation
//! changes.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use parley_core::conversations::{Conversation, ConversationId, Message, StoreError};

use crate::common::{TaskId, TaskKind};
use crate::composer;
use crate::effects::UiEffect;
use crate::events::{ComposerEvent, ListEvent, UiEvent};
use crate::layout::SidebarPresentation;
use crate::session::{CreateOutcome, RequestSeq};
use crate::sidebar::SidebarHit;
use crate::state::AppState;

/// Effects to run once before the first frame.
pub fn init(app: &mut AppState) -> Vec<UiEffect> {
    vec![load_conversations(app)]
}

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.notice.expire(Instant::now(), app.config.notice_ttl());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            if let Some(mode) = app.viewport.observe(width) {
                tracing::debug!(width, height, mode = mode.label(), "viewport mode changed");
            }
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::List(event) => handle_list_event(app, event),
        UiEvent::Composer(event) => handle_composer_event(app, event),
        UiEvent::ConversationCreated { seq, result } => {
            handle_conversation_created(app, seq, result)
        }
        UiEvent::ConversationsLoaded(result) => {
            if let Err(error) = &result {
                tracing::warn!(%error, "failed to load conversations");
            }
            app.sidebar.set_conversations(result);
            vec![]
        }
        UiEvent::MessagesLoaded {
            conversation_id,
            result,
        } => {
            if !app.messages.apply_loaded(&conversation_id, result) {
                tracing::debug!(id = %conversation_id, "dropping messages of another conversation");
            }
            vec![]
        }
        UiEvent::MessageSaved {
            conversation_id,
            result,
        } => handle_message_saved(app, conversation_id, result),
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, task = completed.id.0, "dropping superseded task result");
                vec![]
            }
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            let events = composer::handle_paste(&mut app.composer, &text);
            dispatch_composer_events(app, events)
        }
        // Size changes arrive as the next Frame event.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('n') if ctrl => handle_list_event(app, ListEvent::NewChat),
        KeyCode::Char('b') if ctrl => {
            app.layout.toggle();
            vec![]
        }
        KeyCode::Char('o') if ctrl => {
            if let Some(model) = app.model.cycle() {
                tracing::debug!(model, "model selected");
                let text = format!("Model: {model}");
                app.notice.info(text);
            }
            vec![]
        }
        KeyCode::Up | KeyCode::Down if ctrl => {
            let delta = if key.code == KeyCode::Up { -1 } else { 1 };
            match app.sidebar.neighbor(app.session.current(), delta) {
                Some(id) => handle_list_event(app, ListEvent::Select(id.into())),
                None => vec![],
            }
        }
        KeyCode::Esc => {
            app.layout.close_overlay(app.viewport.mode());
            vec![]
        }
        _ => {
            let events = composer::handle_key(&mut app.composer, app.session.current(), key);
            dispatch_composer_events(app, events)
        }
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if !matches!(mouse.kind, MouseEventKind::Down(_)) {
        return vec![];
    }
    let (column, row) = (mouse.column, mouse.row);
    if app.layout.on_toggle_hint(column, row) {
        return vec![];
    }

    let mode = app.viewport.mode();
    if app.layout.presentation(mode) != SidebarPresentation::Hidden
        && let Some(hit) = app
            .sidebar
            .hit_test(app.layout.sidebar_area.get(), column, row)
    {
        let event = match hit {
            SidebarHit::NewChat => ListEvent::NewChat,
            SidebarHit::Conversation(id) => ListEvent::Select(id.into()),
        };
        return handle_list_event(app, event);
    }

    if app.layout.on_pointer_down(mode, column, row) {
        tracing::debug!(column, row, "closed sidebar overlay on outside click");
    }
    vec![]
}

fn handle_list_event(app: &mut AppState, event: ListEvent) -> Vec<UiEffect> {
    match event {
        ListEvent::Select(raw) => {
            let Ok(id) = ConversationId::parse(raw) else {
                tracing::warn!("ignoring select with an empty conversation id");
                return vec![];
            };
            app.session.select(id);
            let effects = enter_conversation(app);
            app.layout.after_navigation(app.viewport.mode());
            effects
        }
        ListEvent::NewChat => {
            let seq = app.session.begin_create();
            app.layout.after_navigation(app.viewport.mode());
            vec![UiEffect::CreateConversation {
                seq,
                title: app.config.default_conversation_title.clone(),
            }]
        }
    }
}

fn dispatch_composer_events(app: &mut AppState, events: Vec<ComposerEvent>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for event in events {
        effects.extend(handle_composer_event(app, event));
    }
    effects
}

fn handle_composer_event(app: &mut AppState, event: ComposerEvent) -> Vec<UiEffect> {
    match event {
        ComposerEvent::TypingChanged(active) => {
            // The relay only carries activity for a current conversation.
            app.typing.publish(active && app.session.current().is_some());
            vec![]
        }
        ComposerEvent::MessageSent { content } => {
            // Sending never changes the current conversation.
            let Some(conversation_id) = app.session.current().cloned() else {
                tracing::warn!("message sent without a current conversation");
                return vec![];
            };
            let task = start_task(app, TaskKind::MessageSend);
            vec![UiEffect::SendMessage {
                task,
                conversation_id,
                content,
            }]
        }
        ComposerEvent::SendWithoutConversation => {
            app.notice
                .info("No conversation selected. Press Ctrl+N to start one.");
            vec![]
        }
    }
}

fn handle_conversation_created(
    app: &mut AppState,
    seq: RequestSeq,
    result: Result<Conversation, StoreError>,
) -> Vec<UiEffect> {
    match app.session.complete_create(seq, result) {
        CreateOutcome::Applied { conversation } => {
            app.sidebar.upsert(conversation);
            let mut effects = enter_conversation(app);
            effects.push(load_conversations(app));
            effects
        }
        CreateOutcome::Superseded { conversation } => {
            app.sidebar.upsert(conversation);
            vec![load_conversations(app)]
        }
        CreateOutcome::Failed { error } => {
            app.notice.error(format!("{error} (Ctrl+N to retry)"));
            vec![]
        }
        CreateOutcome::Unknown => vec![],
    }
}

fn handle_message_saved(
    app: &mut AppState,
    conversation_id: ConversationId,
    result: Result<Message, StoreError>,
) -> Vec<UiEffect> {
    let events = composer::finish_send(&mut app.composer);
    let mut effects = dispatch_composer_events(app, events);
    match result {
        Ok(_) if app.session.current() == Some(&conversation_id) => {
            effects.push(load_messages(app, conversation_id));
        }
        Ok(_) => {}
        Err(error) => {
            tracing::warn!(id = %conversation_id, %error, "failed to save message");
            app.notice.error(format!("Message not sent: {error}"));
        }
    }
    effects
}

/// Re-parameterizes the per-conversation surfaces for the current id.
///
/// Runs on every select and every applied creation, so the composer and the
/// relayed typing flag start fresh before any later typing event.
fn enter_conversation(app: &mut AppState) -> Vec<UiEffect> {
    app.typing.clear();
    app.composer.reset();
    app.tasks.message_send.clear();

    let current = app.session.current().cloned();
    app.messages.show(current.clone());
    match current {
        Some(conversation_id) => vec![load_messages(app, conversation_id)],
        None => {
            app.tasks.message_load.clear();
            vec![]
        }
    }
}

fn start_task(app: &mut AppState, kind: TaskKind) -> TaskId {
    let id = app.task_seq.next_id();
    app.tasks.state_mut(kind).on_started(id);
    id
}

fn load_conversations(app: &mut AppState) -> UiEffect {
    UiEffect::LoadConversations {
        task: start_task(app, TaskKind::ConversationList),
    }
}

fn load_messages(app: &mut AppState, conversation_id: ConversationId) -> UiEffect {
    UiEffect::LoadMessages {
        task: start_task(app, TaskKind::MessageLoad),
        conversation_id,
    }
}
