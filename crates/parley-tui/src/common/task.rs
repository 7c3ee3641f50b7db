#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Store operations whose results are "latest wins".
///
/// Conversation creation is deliberately not here: its results are guarded
/// by the session's request sequence instead, since every creation counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    ConversationList,
    MessageLoad,
    MessageSend,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    /// Clears the task if `id` is the one in flight.
    ///
    /// Returns false for results of tasks that were superseded by a newer
    /// start (or cleared); those results must be dropped.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub conversation_list: TaskState,
    pub message_load: TaskState,
    pub message_send: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::ConversationList => &self.conversation_list,
            TaskKind::MessageLoad => &self.message_load,
            TaskKind::MessageSend => &self.message_send,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::ConversationList => &mut self.conversation_list,
            TaskKind::MessageLoad => &mut self.message_load,
            TaskKind::MessageSend => &mut self.message_send,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.conversation_list.is_running()
            || self.message_load.is_running()
            || self.message_send.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_task_finishes() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();

        let first = seq.next_id();
        state.on_started(first);
        let second = seq.next_id();
        state.on_started(second);

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }

    #[test]
    fn test_cleared_task_result_is_dropped() {
        let mut seq = TaskSeq::default();
        let mut tasks = Tasks::default();
        let id = seq.next_id();

        tasks.state_mut(TaskKind::MessageSend).on_started(id);
        assert!(tasks.is_any_running());
        tasks.state_mut(TaskKind::MessageSend).clear();

        assert!(!tasks.state_mut(TaskKind::MessageSend).finish_if_active(id));
        assert!(!tasks.is_any_running());
    }
}
