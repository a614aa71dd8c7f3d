//! Action grammars.
//!
//! A grammar is a regular expression with named captures plus a factory function that turns
//! a successful match into a [`QuestAction`]. Patterns are anchored when the grammar is built,
//! so every grammar matches complete lines only.
//!
//! A factory may reject captures it cannot use (a count that overflows, say). The parser then
//! treats that grammar as not matching and moves on to the next one.

use std::fmt::Debug;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::{QuestAction, QuestContext, Symbol};

/// Builds an action from the captures of a matched line.
pub type Factory = fn(&Captures<'_>, &QuestContext) -> Result<QuestAction, Rejected>;

/// A factory's refusal to build an action from otherwise matching text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Rejected(pub String);

/// Problems building or registering grammars.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar '{name}' has an invalid pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: Box<regex::Error>,
    },
    #[error("a grammar named '{0}' is already registered")]
    DuplicateName(&'static str),
}

/// A registered (pattern, factory) pair recognizing one action's syntax.
#[derive(Clone)]
pub struct ActionGrammar {
    name: &'static str,
    source: String,
    pattern: Regex,
    factory: Factory,
}

impl ActionGrammar {
    /// Compile a grammar. `pattern` is matched against the whole line.
    ///
    /// # Errors
    /// - if `pattern` is not a valid regular expression
    pub fn new(name: &'static str, pattern: &str, factory: Factory) -> Result<ActionGrammar, GrammarError> {
        let anchored = format!("^(?:{pattern})$");
        let compiled = Regex::new(&anchored).map_err(|e| GrammarError::InvalidPattern {
            name,
            source: Box::new(e),
        })?;
        Ok(ActionGrammar {
            name,
            source: pattern.to_string(),
            pattern: compiled,
            factory,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern as registered, before anchoring.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Match `line` and, if it matches, run the factory.
    ///
    /// Returns `None` when the pattern does not match at all.
    pub fn try_build(&self, line: &str, ctx: &QuestContext) -> Option<Result<QuestAction, Rejected>> {
        let caps = self.pattern.captures(line)?;
        Some((self.factory)(&caps, ctx))
    }
}

impl Debug for ActionGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionGrammar")
            .field("name", &self.name)
            .field("pattern", &self.source)
            .finish_non_exhaustive()
    }
}

//
// Built-in grammars, in registration order. Earlier entries win when several match.
//
#[rustfmt::skip]
pub(crate) const BUILTIN_GRAMMARS: &[(&str, &str, Factory)] = &[
    ("injured",      r"injured\s+(?<aFoe>[a-zA-Z0-9_.-]+)",                        build_injured),
    ("killed_count", r"killed\s+(?<count>\d+)\s+(?<aFoe>[a-zA-Z0-9_.-]+)",        build_killed_count),
    ("killed",       r"killed\s+(?<aFoe>[a-zA-Z0-9_.-]+)",                         build_killed),
    ("clicked_item", r"clicked\s+item\s+(?<anItem>[a-zA-Z0-9_.-]+)",               build_clicked_item),
    ("clicked_npc",  r"clicked\s+npc\s+(?<aPerson>[a-zA-Z0-9_.-]+)",               build_clicked_npc),
    ("toting",       r"toting\s+(?<anItem>[a-zA-Z0-9_.-]+)",                       build_toting),
    ("when_task",    r"when\s+task\s+(?<aTask>[a-zA-Z0-9_.-]+)",                   build_when_task),
    ("say",          r"say\s+(?<messageId>\d+)",                                   build_say),
    ("start_task",   r"start\s+task\s+(?<aTask>[a-zA-Z0-9_.-]+)",                  build_start_task),
    ("clear_task",   r"clear\s+(?<aTask>[a-zA-Z0-9_.-]+)",                         build_clear_task),
    ("end_quest",    r"end\s+quest",                                               build_end_quest),
];

/// Text of a named capture.
fn capture<'c>(caps: &Captures<'c>, name: &str) -> Result<&'c str, Rejected> {
    caps.name(name)
        .map(|m| m.as_str())
        .ok_or_else(|| Rejected(format!("capture '{name}' missing")))
}

fn symbol(caps: &Captures<'_>, name: &str) -> Result<Symbol, Rejected> {
    capture(caps, name).map(Symbol::from)
}

fn number(caps: &Captures<'_>, name: &str) -> Result<u32, Rejected> {
    let text = capture(caps, name)?;
    text.parse::<u32>()
        .map_err(|e| Rejected(format!("'{text}' is not a usable {name}: {e}")))
}

fn build_injured(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::InjuredFoe {
        foe: symbol(caps, "aFoe")?,
    })
}

fn build_killed_count(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    let count = number(caps, "count")?;
    if count == 0 {
        return Err(Rejected("kill count must be at least 1".to_string()));
    }
    Ok(QuestAction::KilledFoe {
        foe: symbol(caps, "aFoe")?,
        count,
    })
}

fn build_killed(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::KilledFoe {
        foe: symbol(caps, "aFoe")?,
        count: 1,
    })
}

fn build_clicked_item(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::ClickedItem {
        item: symbol(caps, "anItem")?,
    })
}

fn build_clicked_npc(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::ClickedNpc {
        person: symbol(caps, "aPerson")?,
    })
}

fn build_toting(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::Toting {
        item: symbol(caps, "anItem")?,
    })
}

fn build_when_task(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::WhenTask {
        task: symbol(caps, "aTask")?,
    })
}

fn build_say(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::Say {
        message: number(caps, "messageId")?,
    })
}

fn build_start_task(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::StartTask {
        task: symbol(caps, "aTask")?,
    })
}

fn build_clear_task(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::ClearTask {
        task: symbol(caps, "aTask")?,
    })
}

fn build_end_quest(_caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
    Ok(QuestAction::EndQuest)
}
