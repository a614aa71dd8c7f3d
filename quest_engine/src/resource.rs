//! Quest resources and the lookup interface trigger checks read them through.
//!
//! Resources are owned by a [`QuestContext`](crate::QuestContext) and addressed by [`Symbol`].
//! Trigger evaluation only ever sees them through [`ResourceLookup`], which hands out shared
//! references: nothing on the evaluation path can mutate a resource.

pub mod foe;
pub mod item;
pub mod person;

pub use foe::{Foe, StrikeOutcome};
pub use item::Item;
pub use person::Person;

use crate::Symbol;

/// Methods common to every quest resource.
pub trait QuestResource {
    fn symbol(&self) -> &Symbol;
    fn name(&self) -> &str;
}

/// A resolved resource of any kind.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Foe(&'a Foe),
    Item(&'a Item),
    Person(&'a Person),
}
impl Resource<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Foe(_) => "foe",
            Resource::Item(_) => "item",
            Resource::Person(_) => "person",
        }
    }

    pub fn as_quest_resource(&self) -> &dyn QuestResource {
        match self {
            Resource::Foe(foe) => *foe,
            Resource::Item(item) => *item,
            Resource::Person(person) => *person,
        }
    }
}

/// Symbol to resource resolution.
///
/// A symbol that names nothing (never defined, or already removed) resolves to `None`.
/// That is an expected state during play, not an error.
pub trait ResourceLookup {
    fn find_by_symbol(&self, symbol: &Symbol) -> Option<Resource<'_>>;

    fn find_foe(&self, symbol: &Symbol) -> Option<&Foe> {
        match self.find_by_symbol(symbol) {
            Some(Resource::Foe(foe)) => Some(foe),
            _ => None,
        }
    }

    fn find_item(&self, symbol: &Symbol) -> Option<&Item> {
        match self.find_by_symbol(symbol) {
            Some(Resource::Item(item)) => Some(item),
            _ => None,
        }
    }

    fn find_person(&self, symbol: &Symbol) -> Option<&Person> {
        match self.find_by_symbol(symbol) {
            Some(Resource::Person(person)) => Some(person),
            _ => None,
        }
    }
}
