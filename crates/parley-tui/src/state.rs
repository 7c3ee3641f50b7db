//! Application state composition.
//!
//! ```text
//! AppState
//! ├── viewport: ViewportState   (terminal size, narrow/wide mode)
//! ├── layout: LayoutState       (sidebar_open, hit areas)
//! ├── session: SessionState     (current conversation, request sequence)
//! ├── typing: TypingRelay       (composer activity -> message surface)
//! ├── composer: ComposerState   (draft, send in flight)
//! ├── messages: MessagesState   (messages of the current conversation)
//! ├── sidebar: SidebarState     (conversation list)
//! ├── notice: NoticeState       (transient status notices)
//! ├── model: ModelSelector      (header model selection, presentational)
//! ├── task_seq / tasks          (latest-wins task lifecycle)
//! └── config / palette          (read-only presentation settings)
//! ```
//!
//! Each piece of session state has exactly one owner; collaborators read
//! their parameterization from here and report back through events.

use parley_core::config::Config;
use parley_core::conversations::ConversationId;

use crate::common::{Palette, TaskSeq, Tasks};
use crate::composer::ComposerState;
use crate::layout::LayoutState;
use crate::messages::MessagesState;
use crate::model::ModelSelector;
use crate::notice::NoticeState;
use crate::session::SessionState;
use crate::sidebar::SidebarState;
use crate::typing::TypingRelay;
use crate::viewport::{ViewportMode, ViewportState};

pub struct AppState {
    pub should_quit: bool,
    pub config: Config,
    pub palette: Palette,
    pub viewport: ViewportState,
    pub layout: LayoutState,
    pub session: SessionState,
    pub typing: TypingRelay,
    pub composer: ComposerState,
    pub messages: MessagesState,
    pub sidebar: SidebarState,
    pub notice: NoticeState,
    pub model: ModelSelector,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

/// The session state the page exposes to its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_conversation_id: Option<ConversationId>,
    pub sidebar_open: bool,
    pub is_composer_active: bool,
    pub viewport_mode: ViewportMode,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            palette: Palette::for_theme(config.theme),
            viewport: ViewportState::new(config.mobile_breakpoint),
            layout: LayoutState::new(),
            session: SessionState::new(),
            typing: TypingRelay::new(),
            composer: ComposerState::new(),
            messages: MessagesState::new(),
            sidebar: SidebarState::new(),
            notice: NoticeState::new(),
            model: ModelSelector::new(config.models.clone(), &config.default_model),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
            config,
        }
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport.mode()
    }

    /// `is_composer_active` is the relayed value, i.e. what the message
    /// surface renders as `is_typing`.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_conversation_id: self.session.current().cloned(),
            sidebar_open: self.layout.sidebar_open(),
            is_composer_active: self.typing.is_active(),
            viewport_mode: self.viewport.mode(),
        }
    }
}
