//! Effect execution for `QuestAction`.
//!
//! Effects change quest state only: the message log, task statuses and the ended flag.
//! Resources are left alone. Nothing here fails; unknown message ids and unknown tasks are
//! logged and otherwise ignored.

use log::{debug, info, warn};

use crate::{QuestAction, QuestContext, task::QuestState, task::TaskStatus};

impl QuestAction {
    /// Run this effect against the quest state.
    ///
    /// Trigger conditions are a no-op here.
    pub fn execute(&self, ctx: &QuestContext, state: &mut QuestState) {
        match self {
            Self::Say { message } => {
                let line = if let Some(text) = ctx.message(*message) {
                    text.to_string()
                } else {
                    warn!("say {message}: no such message in quest");
                    format!("<missing message {message}>")
                };
                info!("└─ action: Say({message})");
                state.log.push(line);
            },
            Self::StartTask { task } => {
                info!("└─ action: StartTask({task})");
                state.request_start(task.clone());
            },
            Self::ClearTask { task } => {
                info!("└─ action: ClearTask({task})");
                if state.tasks.status(task).is_some() {
                    state.tasks.set(task, TaskStatus::Dormant);
                } else {
                    warn!("clear {task}: no such task in quest");
                }
            },
            Self::EndQuest => {
                info!("└─ action: EndQuest");
                state.ended = true;
            },
            Self::InjuredFoe { .. }
            | Self::KilledFoe { .. }
            | Self::ClickedItem { .. }
            | Self::ClickedNpc { .. }
            | Self::Toting { .. }
            | Self::WhenTask { .. } => {
                debug!("execute called on trigger condition '{self}'; ignored");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_task(symbol: &str, status: TaskStatus) -> QuestState {
        let mut state = QuestState::default();
        state.tasks.set(&symbol.into(), status);
        state
    }

    #[test]
    fn say_logs_message_text_or_placeholder() {
        let mut ctx = QuestContext::new();
        ctx.insert_message(1010, "The marauder howls.");
        let mut state = QuestState::default();
        QuestAction::Say { message: 1010 }.execute(&ctx, &mut state);
        QuestAction::Say { message: 42 }.execute(&ctx, &mut state);
        assert_eq!(state.log, vec!["The marauder howls.", "<missing message 42>"]);
    }

    #[test]
    fn clear_resets_known_task_only() {
        let ctx = QuestContext::new();
        let mut state = state_with_task("_done_", TaskStatus::Triggered);
        QuestAction::ClearTask { task: "_done_".into() }.execute(&ctx, &mut state);
        QuestAction::ClearTask { task: "_ghost_".into() }.execute(&ctx, &mut state);
        assert_eq!(state.tasks.status(&"_done_".into()), Some(TaskStatus::Dormant));
        assert_eq!(state.tasks.status(&"_ghost_".into()), None);
    }

    #[test]
    fn start_task_is_queued_not_run() {
        let ctx = QuestContext::new();
        let mut state = state_with_task("_next_", TaskStatus::Dormant);
        QuestAction::StartTask { task: "_next_".into() }.execute(&ctx, &mut state);
        assert_eq!(state.tasks.status(&"_next_".into()), Some(TaskStatus::Dormant));
        assert_eq!(state.take_start_request(), Some("_next_".into()));
        assert_eq!(state.take_start_request(), None);
    }

    #[test]
    fn end_quest_and_conditions() {
        let ctx = QuestContext::new();
        let mut state = QuestState::default();
        QuestAction::InjuredFoe { foe: "F".into() }.execute(&ctx, &mut state);
        assert!(!state.ended);
        assert!(state.log.is_empty());
        QuestAction::EndQuest.execute(&ctx, &mut state);
        assert!(state.ended);
    }
}
