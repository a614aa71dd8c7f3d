//! Item resource.

use log::info;
use serde::{Deserialize, Serialize};

use crate::{Symbol, resource::QuestResource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    symbol: Symbol,
    name: String,
    clicked: bool,
    carried: bool,
}
impl Item {
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Item {
        Item {
            symbol,
            name: name.into(),
            clicked: false,
            carried: false,
        }
    }

    /// True once the player has clicked (used, inspected) the item.
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn click(&mut self) {
        info!("item '{}' clicked", self.symbol);
        self.clicked = true;
    }

    /// True while the player carries the item.
    pub fn carried(&self) -> bool {
        self.carried
    }

    pub fn set_carried(&mut self, carried: bool) {
        info!("item '{}' carried: {carried}", self.symbol);
        self.carried = carried;
    }
}
impl QuestResource for Item {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }
}
