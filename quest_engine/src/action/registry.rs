//! Ordered registry of action grammars.
//!
//! Registration order is the only precedence rule: the parser tries grammars front to back
//! and the first one that matches and accepts the line wins. The registry is filled at
//! startup and only read afterwards, so one registry can be shared by any number of quests
//! loading side by side.

use log::{debug, info};

use crate::action::grammar::{ActionGrammar, BUILTIN_GRAMMARS, Factory, GrammarError};

#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    grammars: Vec<ActionGrammar>,
}

impl GrammarRegistry {
    /// An empty registry.
    pub fn new() -> GrammarRegistry {
        GrammarRegistry::default()
    }

    /// A registry holding the built-in grammars in their standard order.
    ///
    /// # Errors
    /// - if a built-in pattern fails to compile
    pub fn builtin() -> Result<GrammarRegistry, GrammarError> {
        let mut registry = GrammarRegistry::new();
        for (name, pattern, factory) in BUILTIN_GRAMMARS {
            registry.register(ActionGrammar::new(*name, pattern, *factory)?)?;
        }
        info!("{} built-in action grammars registered", registry.len());
        Ok(registry)
    }

    /// Append a grammar after every grammar already registered.
    ///
    /// # Errors
    /// - if a grammar with the same name is already registered
    pub fn register(&mut self, grammar: ActionGrammar) -> Result<(), GrammarError> {
        if self.get(grammar.name()).is_some() {
            return Err(GrammarError::DuplicateName(grammar.name()));
        }
        debug!("registering grammar '{}' = /{}/", grammar.name(), grammar.pattern());
        self.grammars.push(grammar);
        Ok(())
    }

    /// Compile and append a grammar in one step.
    ///
    /// # Errors
    /// - if the pattern does not compile or the name is taken
    pub fn register_pattern(
        &mut self,
        name: &'static str,
        pattern: &str,
        factory: Factory,
    ) -> Result<(), GrammarError> {
        self.register(ActionGrammar::new(name, pattern, factory)?)
    }

    /// All grammars in registration order.
    pub fn grammars(&self) -> &[ActionGrammar] {
        &self.grammars
    }

    pub fn get(&self, name: &str) -> Option<&ActionGrammar> {
        self.grammars.iter().find(|g| g.name() == name)
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}
