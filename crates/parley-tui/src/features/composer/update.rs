//! Composer reducer.
//!
//! Turns key presses and pastes into draft edits and composer events. The
//! composer never touches session state; the orchestrator consumes the
//! events it emits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parley_core::conversations::ConversationId;

use super::ComposerState;
use crate::events::ComposerEvent;

/// Handles a key routed to the composer.
///
/// `conversation_id` is the composer's parameterization: without a current
/// conversation a send is refused and the draft is kept.
pub fn handle_key(
    composer: &mut ComposerState,
    conversation_id: Option<&ConversationId>,
    key: KeyEvent,
) -> Vec<ComposerEvent> {
    let mut events = Vec::new();
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(ch) if plain => composer.insert_char(ch),
        KeyCode::Backspace => composer.backspace(),
        KeyCode::Enter => {
            if conversation_id.is_none() {
                if composer.is_active() {
                    events.push(ComposerEvent::SendWithoutConversation);
                }
            } else if let Some(content) = composer.begin_send() {
                events.push(ComposerEvent::MessageSent { content });
            }
        }
        _ => {}
    }

    events.extend(composer.take_signal());
    events
}

pub fn handle_paste(composer: &mut ComposerState, text: &str) -> Vec<ComposerEvent> {
    composer.insert_str(text);
    composer.take_signal().into_iter().collect()
}

/// Marks the in-flight send as finished and reports the activity change.
pub fn finish_send(composer: &mut ComposerState) -> Vec<ComposerEvent> {
    composer.finish_send();
    composer.take_signal().into_iter().collect()
}
