//! Task layer --
//!
//! A task is a named list of actions. Its trigger conditions are polled once per tick; when
//! every condition holds (or an effect starts the task directly) the task is latched as
//! triggered and its effects run once. Latched tasks are not polled again until a `clear`
//! effect returns them to dormant.

use std::collections::{HashMap, VecDeque};

use variantly::Variantly;

use crate::{QuestAction, Symbol, TickContext};

/// Whether a task has fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Variantly)]
pub enum TaskStatus {
    #[default]
    Dormant,
    Triggered,
}

/// A task and its parsed actions.
#[derive(Debug, Clone)]
pub struct Task {
    pub symbol: Symbol,
    pub note: Option<String>,
    pub actions: Vec<QuestAction>,
}
impl Task {
    pub fn new(symbol: Symbol, actions: Vec<QuestAction>) -> Task {
        Task {
            symbol,
            note: None,
            actions,
        }
    }

    /// Actions polled each tick.
    pub fn conditions(&self) -> impl Iterator<Item = &QuestAction> {
        self.actions.iter().filter(|a| a.is_trigger_condition())
    }

    /// Actions run once when the task triggers.
    pub fn effects(&self) -> impl Iterator<Item = &QuestAction> {
        self.actions.iter().filter(|a| !a.is_trigger_condition())
    }

    /// True if the task has at least one condition and all of them hold.
    ///
    /// Tasks without conditions only ever trigger through `start task`.
    pub fn conditions_met(&self, ctx: &TickContext<'_>) -> bool {
        let mut conditions = self.conditions().peekable();
        conditions.peek().is_some() && conditions.all(|c| c.check_trigger(ctx))
    }
}

/// Status of every task in a quest, by symbol.
#[derive(Debug, Clone, Default)]
pub struct TaskStates {
    statuses: HashMap<Symbol, TaskStatus>,
}
impl TaskStates {
    pub fn status(&self, task: &Symbol) -> Option<TaskStatus> {
        self.statuses.get(task).copied()
    }

    /// True if the task exists and has triggered.
    pub fn is_triggered(&self, task: &Symbol) -> bool {
        self.status(task).is_some_and(|s| s.is_triggered())
    }

    pub fn set(&mut self, task: &Symbol, status: TaskStatus) {
        self.statuses.insert(task.clone(), status);
    }

    pub fn triggered_count(&self) -> usize {
        self.statuses.values().filter(|s| s.is_triggered()).count()
    }
}

/// Mutable state of a running quest.
#[derive(Debug, Clone, Default)]
pub struct QuestState {
    pub tick: u64,
    pub tasks: TaskStates,
    pub log: Vec<String>,
    pub ended: bool,
    start_requests: VecDeque<Symbol>,
}
impl QuestState {
    /// Ask for a task to be started once the current effect has finished.
    pub fn request_start(&mut self, task: Symbol) {
        self.start_requests.push_back(task);
    }

    /// Next pending start request, oldest first.
    pub fn take_start_request(&mut self) -> Option<Symbol> {
        self.start_requests.pop_front()
    }
}
