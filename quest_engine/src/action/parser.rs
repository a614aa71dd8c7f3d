//! Line parser: source text to [`QuestAction`].
//!
//! Grammars are tried in registry order. The first grammar whose pattern matches the whole
//! line and whose factory accepts the captures produces the action. A factory rejection is
//! not fatal: the line may still belong to a later grammar sharing the same prefix.

use log::debug;
use thiserror::Error;

use crate::{QuestAction, QuestContext, action::registry::GrammarRegistry};

/// Result of trying every registered grammar against one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Matched(QuestAction),
    NoMatch,
}

/// Load-time failure to recognize a source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no registered grammar matches line '{line}'")]
    NoMatchingGrammar { line: String },
}

/// Parse one source line against the registry.
///
/// Surrounding whitespace is ignored; matching is otherwise exact and case-sensitive.
pub fn parse(line: &str, registry: &GrammarRegistry, ctx: &QuestContext) -> ParseOutcome {
    let line = line.trim();
    for grammar in registry.grammars() {
        match grammar.try_build(line, ctx) {
            Some(Ok(action)) => {
                debug!("line '{line}' matched grammar '{}'", grammar.name());
                return ParseOutcome::Matched(action);
            },
            Some(Err(rejected)) => {
                debug!("grammar '{}' rejected line '{line}': {rejected}", grammar.name());
            },
            None => {},
        }
    }
    debug!("line '{line}' matched no grammar");
    ParseOutcome::NoMatch
}

/// Build an action from a source line, failing if no grammar recognizes it.
///
/// # Errors
/// - [`ParseError::NoMatchingGrammar`] carrying the offending line
pub fn create_from_source(line: &str, registry: &GrammarRegistry, ctx: &QuestContext) -> Result<QuestAction, ParseError> {
    match parse(line, registry, ctx) {
        ParseOutcome::Matched(action) => Ok(action),
        ParseOutcome::NoMatch => Err(ParseError::NoMatchingGrammar {
            line: line.trim().to_string(),
        }),
    }
}

impl GrammarRegistry {
    /// Shorthand for [`parse`] with this registry.
    pub fn parse(&self, line: &str, ctx: &QuestContext) -> ParseOutcome {
        parse(line, self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbol, action::grammar::Rejected};
    use regex::Captures;

    fn builtin() -> GrammarRegistry {
        GrammarRegistry::builtin().expect("builtin registry")
    }

    fn build_generic_injury(caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
        let who = caps.name("who").map_or("", |m| m.as_str());
        Ok(QuestAction::KilledFoe {
            foe: Symbol::new(who),
            count: 99,
        })
    }

    fn reject_everything(_caps: &Captures<'_>, _ctx: &QuestContext) -> Result<QuestAction, Rejected> {
        Err(Rejected("never".to_string()))
    }

    #[test]
    fn injured_line_yields_condition_with_symbol() {
        let ctx = QuestContext::new();
        let action = match parse("injured Foe_A", &builtin(), &ctx) {
            ParseOutcome::Matched(action) => action,
            ParseOutcome::NoMatch => panic!("expected a match"),
        };
        assert_eq!(action, QuestAction::InjuredFoe { foe: "Foe_A".into() });
        assert!(action.is_trigger_condition());
    }

    #[test]
    fn bare_keyword_is_a_parse_failure() {
        let ctx = QuestContext::new();
        let err = create_from_source("injured", &builtin(), &ctx).expect_err("no identifier");
        assert_eq!(
            err,
            ParseError::NoMatchingGrammar {
                line: "injured".to_string()
            }
        );
    }

    #[test]
    fn earlier_grammar_wins_when_both_match() {
        let ctx = QuestContext::new();
        let mut first = GrammarRegistry::new();
        first
            .register_pattern("generic", r"injured\s+(?<who>\S+)", build_generic_injury)
            .expect("register");
        for g in builtin().grammars() {
            first.register(g.clone()).expect("register builtin");
        }
        assert_eq!(
            first.parse("injured Foe_A", &ctx),
            ParseOutcome::Matched(QuestAction::KilledFoe {
                foe: "Foe_A".into(),
                count: 99
            })
        );

        let mut last = builtin();
        last.register_pattern("generic", r"injured\s+(?<who>\S+)", build_generic_injury)
            .expect("register");
        assert_eq!(
            last.parse("injured Foe_A", &ctx),
            ParseOutcome::Matched(QuestAction::InjuredFoe { foe: "Foe_A".into() })
        );
    }

    #[test]
    fn rejection_falls_through_to_later_grammars() {
        let ctx = QuestContext::new();
        let mut registry = GrammarRegistry::new();
        registry
            .register_pattern("picky", r"injured\s+\S+", reject_everything)
            .expect("register");
        for g in builtin().grammars() {
            registry.register(g.clone()).expect("register builtin");
        }
        assert_eq!(
            registry.parse("injured Foe_A", &ctx),
            ParseOutcome::Matched(QuestAction::InjuredFoe { foe: "Foe_A".into() })
        );
    }

    #[test]
    fn rejected_kill_count_ends_in_no_match() {
        let ctx = QuestContext::new();
        let registry = builtin();
        assert_eq!(registry.parse("killed 0 Rats", &ctx), ParseOutcome::NoMatch);
        assert_eq!(registry.parse("killed 99999999999 Rats", &ctx), ParseOutcome::NoMatch);
        assert_eq!(
            registry.parse("killed Rats", &ctx),
            ParseOutcome::Matched(QuestAction::KilledFoe {
                foe: "Rats".into(),
                count: 1
            })
        );
    }

    #[test]
    fn whitespace_and_case_rules() {
        let ctx = QuestContext::new();
        let registry = builtin();
        assert_eq!(
            registry.parse("   clicked   npc  Innkeeper \t", &ctx),
            ParseOutcome::Matched(QuestAction::ClickedNpc {
                person: "Innkeeper".into()
            })
        );
        assert_eq!(registry.parse("Injured Foe_A", &ctx), ParseOutcome::NoMatch);
        assert_eq!(registry.parse("", &ctx), ParseOutcome::NoMatch);
    }

    #[test]
    fn every_builtin_shape_parses() {
        let ctx = QuestContext::new();
        let registry = builtin();
        let lines = [
            "injured Foe_A",
            "killed 2 Rats",
            "killed Rats",
            "clicked item Sealed_Letter",
            "clicked npc Innkeeper",
            "toting Sealed_Letter",
            "when task _met_",
            "say 1010",
            "start task _next_",
            "clear _met_",
            "end quest",
        ];
        for line in lines {
            let action = create_from_source(line, &registry, &ctx).expect(line);
            assert_eq!(action.to_string(), line);
        }
    }

    #[test]
    fn parsing_is_deterministic() {
        let ctx = QuestContext::new();
        let registry = builtin();
        let a = registry.parse("toting Gem", &ctx);
        let b = registry.parse("toting Gem", &ctx);
        assert_eq!(a, b);
    }
}
