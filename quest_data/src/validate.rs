use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or duplicated entries in a `QuestDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateSymbol { kind: &'static str, symbol: String },
    DuplicateMessage { id: u32 },
    MalformedSymbol { kind: &'static str, symbol: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSymbol { kind, symbol } => {
                write!(f, "duplicate {kind} symbol '{symbol}'")
            },
            ValidationError::DuplicateMessage { id } => write!(f, "duplicate message id {id}"),
            ValidationError::MalformedSymbol { kind, symbol } => {
                write!(f, "malformed {kind} symbol '{symbol}' (allowed: letters, digits, '_', '.', '-')")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Returns true if `symbol` is non-empty and uses only the identifier characters the DSL accepts.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Validate symbols and basic invariants in a `QuestDef`.
///
/// Symbols share one namespace across foes, items, persons and tasks, since DSL lines
/// refer to them without saying which kind they are.
///
/// ```
/// use quest_data::{FoeDef, QuestDef, QuestMeta, TaskDef, validate_quest};
///
/// let quest = QuestDef {
///     quest: QuestMeta { name: "demo".into(), ..QuestMeta::default() },
///     foes: vec![FoeDef { symbol: "Rat".into(), name: "rat".into(), max_hp: 4, count: 1 }],
///     tasks: vec![TaskDef { symbol: "_bitten_".into(), note: None, actions: vec!["injured Rat".into()] }],
///     ..QuestDef::default()
/// };
/// assert!(validate_quest(&quest).is_empty());
/// ```
pub fn validate_quest(quest: &QuestDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if quest.quest.name.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "quest name missing".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (kind, symbol) in quest.symbols() {
        if !is_valid_symbol(symbol) {
            errors.push(ValidationError::MalformedSymbol {
                kind,
                symbol: symbol.to_string(),
            });
        }
        if !seen.insert(symbol) {
            errors.push(ValidationError::DuplicateSymbol {
                kind,
                symbol: symbol.to_string(),
            });
        }
    }

    for foe in &quest.foes {
        if foe.max_hp == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("foe '{}' max_hp must be at least 1", foe.symbol),
            });
        }
        if foe.count == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("foe '{}' count must be at least 1", foe.symbol),
            });
        }
    }

    let mut message_ids = HashSet::new();
    for msg in &quest.messages {
        if !message_ids.insert(msg.id) {
            errors.push(ValidationError::DuplicateMessage { id: msg.id });
        }
    }

    for task in &quest.tasks {
        if task.actions.iter().all(|line| line.trim().is_empty()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("task '{}' has no actions", task.symbol),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foe(symbol: &str, max_hp: u32) -> FoeDef {
        FoeDef {
            symbol: symbol.to_string(),
            name: format!("Foe {symbol}"),
            max_hp,
            count: 1,
        }
    }

    fn task(symbol: &str, actions: &[&str]) -> TaskDef {
        TaskDef {
            symbol: symbol.to_string(),
            note: None,
            actions: actions.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    fn base_quest() -> QuestDef {
        QuestDef {
            quest: QuestMeta {
                name: "demo".into(),
                ..QuestMeta::default()
            },
            foes: vec![foe("Marauder_Leader", 30)],
            tasks: vec![task("_wounded_", &["injured Marauder_Leader"])],
            ..QuestDef::default()
        }
    }

    #[test]
    fn base_quest_is_valid() {
        assert!(validate_quest(&base_quest()).is_empty());
    }

    #[test]
    fn duplicate_symbols_are_reported_across_kinds() {
        let mut quest = base_quest();
        quest.items.push(ItemDef {
            symbol: "Marauder_Leader".into(),
            name: "decoy".into(),
            carried: false,
        });
        let errors = validate_quest(&quest);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateSymbol {
                kind: "item",
                symbol: "Marauder_Leader".into()
            }]
        );
    }

    #[test]
    fn malformed_symbols_and_bad_values_are_all_reported() {
        let mut quest = base_quest();
        quest.quest.name = "  ".into();
        quest.foes.push(foe("bad symbol", 0));
        quest.tasks.push(task("_empty_", &["", "   "]));
        quest.messages.push(MessageDef { id: 7, text: "a".into() });
        quest.messages.push(MessageDef { id: 7, text: "b".into() });

        let errors = validate_quest(&quest);
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::MalformedSymbol {
            kind: "foe",
            symbol: "bad symbol".into()
        }));
        assert!(errors.contains(&ValidationError::DuplicateMessage { id: 7 }));
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().contains("task '_empty_' has no actions"))
        );
    }

    #[test]
    fn symbol_charset_matches_dsl_identifiers() {
        assert!(is_valid_symbol("Foe_A"));
        assert!(is_valid_symbol("item.1-b"));
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("two words"));
        assert!(!is_valid_symbol("élan"));
    }
}
