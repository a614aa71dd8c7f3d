//! condition.rs -- trigger evaluation for `QuestAction`
//!
//! A trigger check is a pure read of current quest state. It never mutates resources,
//! never fails, and keeps no memory between calls: whether a condition has "already fired"
//! is tracked by the owning task, not here.
//!
//! Resolution failures degrade to `false`. A foe that was removed (or never spawned) is not
//! injured, whatever happened to it before it went away.

use log::trace;

use crate::{QuestAction, resource::ResourceLookup, task::TaskStates};

/// Everything a trigger check may read during one tick.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    pub tick: u64,
    pub resources: &'a dyn ResourceLookup,
    pub tasks: &'a TaskStates,
}

impl QuestAction {
    /// Returns true if this trigger condition holds right now.
    ///
    /// Always false for effects.
    pub fn check_trigger(&self, ctx: &TickContext<'_>) -> bool {
        let fired = match self {
            Self::InjuredFoe { foe } => ctx.resources.find_foe(foe).is_some_and(|f| f.injured_trigger()),
            Self::KilledFoe { foe, count } => ctx
                .resources
                .find_foe(foe)
                .is_some_and(|f| f.killed_count() >= *count),
            Self::ClickedItem { item } => ctx.resources.find_item(item).is_some_and(|i| i.clicked()),
            Self::ClickedNpc { person } => ctx.resources.find_person(person).is_some_and(|p| p.clicked()),
            Self::Toting { item } => ctx.resources.find_item(item).is_some_and(|i| i.carried()),
            Self::WhenTask { task } => ctx.tasks.is_triggered(task),
            Self::Say { .. } | Self::StartTask { .. } | Self::ClearTask { .. } | Self::EndQuest => false,
        };
        trace!("tick {}: check '{self}' -> {fired}", ctx.tick);
        fired
    }
}
