//! Per-quest registry of live resources.
//!
//! [`QuestContext`] owns every foe, item and person of one running quest plus its numbered
//! message texts. Symbols share a single namespace across resource kinds, so lookup by symbol
//! alone is unambiguous.

use std::collections::HashMap;

use log::{debug, info};

use crate::{
    Symbol,
    resource::{Foe, Item, Person, QuestResource, Resource, ResourceLookup},
};

#[derive(Debug, Clone, Default)]
pub struct QuestContext {
    foes: HashMap<Symbol, Foe>,
    items: HashMap<Symbol, Item>,
    persons: HashMap<Symbol, Person>,
    messages: HashMap<u32, String>,
}
impl QuestContext {
    pub fn new() -> QuestContext {
        QuestContext::default()
    }

    /// Add or replace a foe. Returns the foe previously held under the same symbol.
    pub fn insert_foe(&mut self, foe: Foe) -> Option<Foe> {
        debug!("context: foe '{}' added", foe.symbol());
        self.foes.insert(foe.symbol().clone(), foe)
    }

    pub fn insert_item(&mut self, item: Item) -> Option<Item> {
        debug!("context: item '{}' added", item.symbol());
        self.items.insert(item.symbol().clone(), item)
    }

    pub fn insert_person(&mut self, person: Person) -> Option<Person> {
        debug!("context: person '{}' added", person.symbol());
        self.persons.insert(person.symbol().clone(), person)
    }

    pub fn insert_message(&mut self, id: u32, text: impl Into<String>) {
        self.messages.insert(id, text.into());
    }

    /// Remove whatever resource the symbol names. Returns the kind removed, if any.
    pub fn remove(&mut self, symbol: &Symbol) -> Option<&'static str> {
        let kind = if self.foes.remove(symbol).is_some() {
            "foe"
        } else if self.items.remove(symbol).is_some() {
            "item"
        } else if self.persons.remove(symbol).is_some() {
            "person"
        } else {
            return None;
        };
        info!("context: {kind} '{symbol}' removed");
        Some(kind)
    }

    pub fn foe_mut(&mut self, symbol: &Symbol) -> Option<&mut Foe> {
        self.foes.get_mut(symbol)
    }

    pub fn item_mut(&mut self, symbol: &Symbol) -> Option<&mut Item> {
        self.items.get_mut(symbol)
    }

    pub fn person_mut(&mut self, symbol: &Symbol) -> Option<&mut Person> {
        self.persons.get_mut(symbol)
    }

    pub fn message(&self, id: u32) -> Option<&str> {
        self.messages.get(&id).map(String::as_str)
    }

    pub fn foes(&self) -> impl Iterator<Item = &Foe> {
        self.foes.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// Total number of live resources of all kinds.
    pub fn resource_count(&self) -> usize {
        self.foes.len() + self.items.len() + self.persons.len()
    }
}

impl ResourceLookup for QuestContext {
    fn find_by_symbol(&self, symbol: &Symbol) -> Option<Resource<'_>> {
        self.foes
            .get(symbol)
            .map(Resource::Foe)
            .or_else(|| self.items.get(symbol).map(Resource::Item))
            .or_else(|| self.persons.get(symbol).map(Resource::Person))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> QuestContext {
        let mut ctx = QuestContext::new();
        ctx.insert_foe(Foe::new("Marauder_Leader".into(), "Marauder leader", 20, 1));
        ctx.insert_item(Item::new("Sealed_Letter".into(), "sealed letter"));
        ctx.insert_person(Person::new("Innkeeper".into(), "Innkeeper"));
        ctx
    }

    #[test]
    fn lookup_resolves_each_kind() {
        let ctx = context();
        assert_eq!(
            ctx.find_by_symbol(&"Marauder_Leader".into()).map(|r| r.kind()),
            Some("foe")
        );
        assert_eq!(ctx.find_by_symbol(&"Sealed_Letter".into()).map(|r| r.kind()), Some("item"));
        assert_eq!(ctx.find_by_symbol(&"Innkeeper".into()).map(|r| r.kind()), Some("person"));
        assert!(ctx.find_by_symbol(&"Nobody".into()).is_none());
    }

    #[test]
    fn typed_lookup_rejects_other_kinds() {
        let ctx = context();
        assert!(ctx.find_foe(&"Innkeeper".into()).is_none());
        assert!(ctx.find_person(&"Innkeeper".into()).is_some());
        assert!(ctx.find_item(&"Marauder_Leader".into()).is_none());
    }

    #[test]
    fn removed_resources_are_not_found() {
        let mut ctx = context();
        assert_eq!(ctx.resource_count(), 3);
        assert_eq!(ctx.remove(&"Marauder_Leader".into()), Some("foe"));
        assert!(ctx.find_foe(&"Marauder_Leader".into()).is_none());
        assert_eq!(ctx.remove(&"Marauder_Leader".into()), None);
        assert_eq!(ctx.resource_count(), 2);
    }

    #[test]
    fn resolved_resources_expose_common_fields() {
        let ctx = context();
        let letter = ctx.find_by_symbol(&"Sealed_Letter".into()).expect("letter");
        assert_eq!(letter.as_quest_resource().name(), "sealed letter");
    }

    #[test]
    fn messages_by_id() {
        let mut ctx = context();
        ctx.insert_message(1010, "The marauder howls.");
        assert_eq!(ctx.message(1010), Some("The marauder howls."));
        assert_eq!(ctx.message(1011), None);
    }
}
