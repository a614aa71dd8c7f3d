//! Parses task action lines into runnable [`Task`]s.
//!
//! Blank lines and lines starting with `--` are skipped. Line numbers in errors count every
//! entry of the task's `actions` list, skipped ones included, starting at 1.

use anyhow::{Context, Result};
use log::{debug, warn};
use quest_data::{QuestDef, TaskDef};

use crate::{GrammarRegistry, QuestAction, QuestContext, ResourceLookup, Symbol, Task, create_from_source};

/// Parse every task in the quest, in declaration order.
///
/// # Errors
/// - on the first line no grammar recognizes, naming the task, the line number and its text
pub fn build_tasks(def: &QuestDef, registry: &GrammarRegistry, ctx: &QuestContext) -> Result<Vec<Task>> {
    def.tasks.iter().map(|t| task_from_def(t, registry, ctx)).collect()
}

fn task_from_def(def: &TaskDef, registry: &GrammarRegistry, ctx: &QuestContext) -> Result<Task> {
    let mut actions = Vec::with_capacity(def.actions.len());
    for (idx, line) in def.actions.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        let action = create_from_source(trimmed, registry, ctx)
            .with_context(|| format!("task '{}', line {}: '{trimmed}'", def.symbol, idx + 1))?;
        debug!("task '{}': {action}", def.symbol);
        actions.push(action);
    }
    Ok(Task {
        symbol: Symbol::new(&def.symbol),
        note: def.note.clone(),
        actions,
    })
}

/// Log a warning for every action naming a symbol the quest does not define.
///
/// Such actions still load: a condition on an absent resource simply never holds.
pub fn warn_unresolved(tasks: &[Task], ctx: &QuestContext) {
    for task in tasks {
        for action in &task.actions {
            if let QuestAction::Say { message } = action
                && ctx.message(*message).is_none()
            {
                warn!("task '{}': '{action}' refers to an undefined message", task.symbol);
            }
            let Some(symbol) = action.referenced_symbol() else {
                continue;
            };
            let known = match action {
                QuestAction::WhenTask { .. } | QuestAction::StartTask { .. } | QuestAction::ClearTask { .. } => {
                    tasks.iter().any(|t| &t.symbol == symbol)
                },
                _ => ctx.find_by_symbol(symbol).is_some(),
            };
            if !known {
                warn!("task '{}': '{action}' refers to unknown symbol '{symbol}'", task.symbol);
            }
        }
    }
}
