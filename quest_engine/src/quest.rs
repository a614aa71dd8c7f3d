//! A running quest.
//!
//! [`Quest`] owns one quest's resources, tasks and state, and advances them one tick at a
//! time. Every tick first polls dormant tasks against a snapshot of task statuses taken at the
//! start of the tick, then runs the effects of each newly triggered task in trigger order.
//!
//! A task runs at most once per tick. Being cleared and started again within the same tick
//! does not queue it a second time; it becomes runnable again from the next tick on.

use std::collections::{HashSet, VecDeque};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::{
    QuestContext, Symbol, TickContext,
    task::{QuestState, Task, TaskStatus},
};

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Tasks that triggered, in the order their effects ran.
    pub triggered: Vec<Symbol>,
    /// Log lines produced by `say` effects.
    pub messages: Vec<String>,
    pub ended: bool,
}

#[derive(Debug, Clone)]
pub struct Quest {
    pub name: String,
    pub title: String,
    /// Distinguishes quests loaded side by side in log output.
    pub instance_id: Uuid,
    context: QuestContext,
    tasks: Vec<Task>,
    state: QuestState,
}

impl Quest {
    /// Assemble a quest. Every task starts out dormant.
    pub fn new(name: impl Into<String>, title: impl Into<String>, context: QuestContext, tasks: Vec<Task>) -> Quest {
        let mut state = QuestState::default();
        for task in &tasks {
            state.tasks.set(&task.symbol, TaskStatus::Dormant);
        }
        Quest {
            name: name.into(),
            title: title.into(),
            instance_id: Uuid::new_v4(),
            context,
            tasks,
            state,
        }
    }

    pub fn context(&self) -> &QuestContext {
        &self.context
    }

    /// Mutable access to resources, for whatever drives the world between ticks.
    pub fn context_mut(&mut self) -> &mut QuestContext {
        &mut self.context
    }

    pub fn state(&self) -> &QuestState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_status(&self, task: &Symbol) -> Option<TaskStatus> {
        self.state.tasks.status(task)
    }

    pub fn is_ended(&self) -> bool {
        self.state.ended
    }

    /// Advance the quest by one tick.
    ///
    /// An ended quest does not advance; the returned report is empty apart from the current
    /// tick number and the ended flag.
    pub fn tick(&mut self) -> TickReport {
        if self.state.ended {
            return TickReport {
                tick: self.state.tick,
                ended: true,
                ..TickReport::default()
            };
        }
        self.state.tick += 1;
        let tick = self.state.tick;
        let log_start = self.state.log.len();

        let snapshot = self.state.tasks.clone();
        let tick_ctx = TickContext {
            tick,
            resources: &self.context,
            tasks: &snapshot,
        };
        let mut queue = VecDeque::new();
        let mut queued = HashSet::new();
        for (idx, task) in self.tasks.iter().enumerate() {
            if snapshot.status(&task.symbol) == Some(TaskStatus::Dormant) && task.conditions_met(&tick_ctx) {
                self.state.tasks.set(&task.symbol, TaskStatus::Triggered);
                queued.insert(idx);
                queue.push_back(idx);
            }
        }

        let mut triggered = Vec::new();
        while let Some(idx) = queue.pop_front() {
            let task = &self.tasks[idx];
            info!("[{}] tick {tick}: task '{}' triggered", self.instance_id, task.symbol);
            triggered.push(task.symbol.clone());
            for effect in task.effects() {
                effect.execute(&self.context, &mut self.state);
                if self.state.ended {
                    break;
                }
            }
            if self.state.ended {
                info!(
                    "[{}] tick {tick}: quest '{}' ended by task '{}'",
                    self.instance_id, self.name, task.symbol
                );
                while self.state.take_start_request().is_some() {}
                break;
            }
            while let Some(started) = self.state.take_start_request() {
                match position_of(&self.tasks, &started) {
                    Some(next) if queued.contains(&next) => {
                        debug!("start task {started}: already ran this tick");
                    },
                    Some(next) if self.state.tasks.status(&started) == Some(TaskStatus::Dormant) => {
                        self.state.tasks.set(&started, TaskStatus::Triggered);
                        queued.insert(next);
                        queue.push_back(next);
                    },
                    Some(_) => debug!("start task {started}: already triggered"),
                    None => warn!("start task {started}: no such task in quest"),
                }
            }
        }

        TickReport {
            tick,
            triggered,
            messages: self.state.log[log_start..].to_vec(),
            ended: self.state.ended,
        }
    }
}

fn position_of(tasks: &[Task], symbol: &Symbol) -> Option<usize> {
    tasks.iter().position(|t| &t.symbol == symbol)
}
