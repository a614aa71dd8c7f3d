//! Builds the live resource context from a `QuestDef`.

use quest_data::{FoeDef, ItemDef, PersonDef, QuestDef};

use crate::{Foe, Item, Person, QuestContext, Symbol};

/// Populate a fresh `QuestContext` with every foe, item, person and message of the quest.
pub fn build_context(def: &QuestDef) -> QuestContext {
    let mut ctx = QuestContext::new();
    for foe in &def.foes {
        ctx.insert_foe(foe_from_def(foe));
    }
    for item in &def.items {
        ctx.insert_item(item_from_def(item));
    }
    for person in &def.persons {
        ctx.insert_person(person_from_def(person));
    }
    for message in &def.messages {
        ctx.insert_message(message.id, message.text.clone());
    }
    ctx
}

fn foe_from_def(def: &FoeDef) -> Foe {
    Foe::new(Symbol::new(&def.symbol), def.name.clone(), def.max_hp, def.count)
}

fn item_from_def(def: &ItemDef) -> Item {
    let mut item = Item::new(Symbol::new(&def.symbol), def.name.clone());
    item.set_carried(def.carried);
    item
}

fn person_from_def(def: &PersonDef) -> Person {
    Person::new(Symbol::new(&def.symbol), def.name.clone())
}
