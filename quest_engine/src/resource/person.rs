//! Person resource: a non-hostile character the quest tracks.

use log::info;
use serde::{Deserialize, Serialize};

use crate::{Symbol, resource::QuestResource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    symbol: Symbol,
    name: String,
    clicked: bool,
}
impl Person {
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Person {
        Person {
            symbol,
            name: name.into(),
            clicked: false,
        }
    }

    /// True once the player has clicked (talked to) this person.
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn click(&mut self) {
        info!("person '{}' clicked", self.symbol);
        self.clicked = true;
    }
}
impl QuestResource for Person {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }
}
