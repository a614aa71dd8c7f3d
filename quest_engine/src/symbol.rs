//! Quest-scoped symbols.
//!
//! A [`Symbol`] names a resource or task inside one quest. Symbols are compared by their
//! underlying name only; they carry no kind, and are not validated when built from DSL text.
//! Whether a symbol actually names something is decided later by resource lookup.

use std::borrow::Borrow;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Symbol {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Symbol(value)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equality_is_by_name() {
        assert_eq!(Symbol::new("Foe_A"), Symbol::from("Foe_A"));
        assert_ne!(Symbol::new("Foe_A"), Symbol::new("foe_a"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Symbol::new("Innkeeper"), 3);
        assert_eq!(map.get("Innkeeper"), Some(&3));
        assert!(map.get("innkeeper").is_none());
    }

    #[test]
    fn no_validation_on_construction() {
        let odd = Symbol::new("not a valid ident!");
        assert_eq!(odd.to_string(), "not a valid ident!");
    }
}
