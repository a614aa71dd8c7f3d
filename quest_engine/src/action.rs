//! Quest actions --
//!
//! Every line of a quest task is one action. Lines are recognized by the ordered grammars of a
//! [`GrammarRegistry`] and turned into [`QuestAction`] values at load time.
//!
//! Actions come in two kinds:
//! - **trigger conditions** are polled once per tick through [`QuestAction::check_trigger`];
//! - **effects** are run once, by the task layer, when their task triggers
//!   ([`QuestAction::execute`]).

pub mod condition;
pub mod effect;
pub mod grammar;
pub mod parser;
pub mod registry;

pub use condition::TickContext;
pub use grammar::{ActionGrammar, Factory, GrammarError, Rejected};
pub use parser::{ParseError, ParseOutcome, create_from_source, parse};
pub use registry::GrammarRegistry;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// A parsed quest action with its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestAction {
    /// `injured <aFoe>`: the foe took damage without dying.
    InjuredFoe { foe: Symbol },
    /// `killed <aFoe>` / `killed <n> <aFoe>`: at least `count` individuals are dead.
    KilledFoe { foe: Symbol, count: u32 },
    /// `clicked item <anItem>`
    ClickedItem { item: Symbol },
    /// `clicked npc <aPerson>`
    ClickedNpc { person: Symbol },
    /// `toting <anItem>`: the player carries the item.
    Toting { item: Symbol },
    /// `when task <aTask>`: another task has triggered.
    WhenTask { task: Symbol },
    /// `say <messageId>`
    Say { message: u32 },
    /// `start task <aTask>`
    StartTask { task: Symbol },
    /// `clear <aTask>`
    ClearTask { task: Symbol },
    /// `end quest`
    EndQuest,
}

impl QuestAction {
    /// True for actions the task layer polls; false for one-shot effects.
    pub fn is_trigger_condition(&self) -> bool {
        match self {
            Self::InjuredFoe { .. }
            | Self::KilledFoe { .. }
            | Self::ClickedItem { .. }
            | Self::ClickedNpc { .. }
            | Self::Toting { .. }
            | Self::WhenTask { .. } => true,
            Self::Say { .. } | Self::StartTask { .. } | Self::ClearTask { .. } | Self::EndQuest => false,
        }
    }

    /// The symbol this action refers to, if any.
    pub fn referenced_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::InjuredFoe { foe } | Self::KilledFoe { foe, .. } => Some(foe),
            Self::ClickedItem { item } | Self::Toting { item } => Some(item),
            Self::ClickedNpc { person } => Some(person),
            Self::WhenTask { task } | Self::StartTask { task } | Self::ClearTask { task } => Some(task),
            Self::Say { .. } | Self::EndQuest => None,
        }
    }
}

/// Renders the action back into DSL source form.
impl Display for QuestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InjuredFoe { foe } => write!(f, "injured {foe}"),
            Self::KilledFoe { foe, count: 1 } => write!(f, "killed {foe}"),
            Self::KilledFoe { foe, count } => write!(f, "killed {count} {foe}"),
            Self::ClickedItem { item } => write!(f, "clicked item {item}"),
            Self::ClickedNpc { person } => write!(f, "clicked npc {person}"),
            Self::Toting { item } => write!(f, "toting {item}"),
            Self::WhenTask { task } => write!(f, "when task {task}"),
            Self::Say { message } => write!(f, "say {message}"),
            Self::StartTask { task } => write!(f, "start task {task}"),
            Self::ClearTask { task } => write!(f, "clear {task}"),
            Self::EndQuest => write!(f, "end quest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_splits_conditions_from_effects() {
        assert!(QuestAction::InjuredFoe { foe: "F".into() }.is_trigger_condition());
        assert!(QuestAction::WhenTask { task: "T".into() }.is_trigger_condition());
        assert!(!QuestAction::Say { message: 1 }.is_trigger_condition());
        assert!(!QuestAction::EndQuest.is_trigger_condition());
    }

    #[test]
    fn display_uses_source_syntax() {
        let single = QuestAction::KilledFoe {
            foe: "Rats".into(),
            count: 1,
        };
        let many = QuestAction::KilledFoe {
            foe: "Rats".into(),
            count: 4,
        };
        assert_eq!(single.to_string(), "killed Rats");
        assert_eq!(many.to_string(), "killed 4 Rats");
        assert_eq!(QuestAction::ClearTask { task: "_t_".into() }.to_string(), "clear _t_");
    }

    #[test]
    fn referenced_symbol_per_variant() {
        let act = QuestAction::ClickedNpc {
            person: "Innkeeper".into(),
        };
        assert_eq!(act.referenced_symbol().map(Symbol::as_str), Some("Innkeeper"));
        assert!(QuestAction::Say { message: 3 }.referenced_symbol().is_none());
    }
}
