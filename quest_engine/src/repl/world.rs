//! `repl::world` module
//!
//! Handlers for commands that change quest resources. Each returns true if anything
//! changed, which tells the loop to tick the quest.

use log::info;

use crate::resource::StrikeOutcome;
use crate::style::QuestStyle;
use crate::{Quest, QuestResource, Symbol};

fn not_found(kind: &str, symbol: &str) -> bool {
    println!("{}", format!("There is no {kind} called '{symbol}' here.").denied_style());
    false
}

/// Strike a foe for some amount of damage.
pub fn hit_handler(quest: &mut Quest, foe: &str, amount: u32) -> bool {
    let Some(target) = quest.context_mut().foe_mut(&Symbol::new(foe)) else {
        return not_found("foe", foe);
    };
    let name = target.name().to_string();
    match target.strike(amount) {
        StrikeOutcome::Ignored => {
            println!("{} shrugs it off.", name.foe_style());
            false
        },
        StrikeOutcome::Wounded { hp_left } => {
            info!("{foe} hit for {amount}, {hp_left} hp left");
            println!("You hit {} for {amount}. ({hp_left} hp left)", name.foe_style());
            true
        },
        StrikeOutcome::Slain { remaining } => {
            info!("{foe} slain by a hit for {amount}, {remaining} left");
            println!("You cut down {}! ({remaining} remaining)", name.foe_style());
            true
        },
    }
}

/// Kill one individual of a foe outright.
pub fn kill_handler(quest: &mut Quest, foe: &str) -> bool {
    let Some(target) = quest.context_mut().foe_mut(&Symbol::new(foe)) else {
        return not_found("foe", foe);
    };
    let name = target.name().to_string();
    match target.slay() {
        StrikeOutcome::Slain { remaining } => {
            info!("{foe} slain outright, {remaining} left");
            println!("{} falls. ({remaining} remaining)", name.foe_style());
            true
        },
        _ => {
            println!("{} has no one left standing.", name.foe_style());
            false
        },
    }
}

/// Let a foe recover, clearing its injury so `injured` conditions stop holding.
pub fn recover_handler(quest: &mut Quest, foe: &str) -> bool {
    let Some(target) = quest.context_mut().foe_mut(&Symbol::new(foe)) else {
        return not_found("foe", foe);
    };
    if target.recover() {
        println!("{} catches its breath.", target.name().foe_style());
        true
    } else {
        println!("{} has no one left standing.", target.name().foe_style());
        false
    }
}

/// Take a resource of any kind out of the quest.
pub fn remove_handler(quest: &mut Quest, symbol: &str) -> bool {
    match quest.context_mut().remove(&Symbol::new(symbol)) {
        Some(kind) => {
            println!("The {kind} '{symbol}' is gone.");
            true
        },
        None => not_found("resource", symbol),
    }
}

pub fn click_item_handler(quest: &mut Quest, item: &str) -> bool {
    let Some(target) = quest.context_mut().item_mut(&Symbol::new(item)) else {
        return not_found("item", item);
    };
    target.click();
    println!("You examine the {}.", target.name().item_style());
    true
}

pub fn click_npc_handler(quest: &mut Quest, person: &str) -> bool {
    let Some(target) = quest.context_mut().person_mut(&Symbol::new(person)) else {
        return not_found("person", person);
    };
    target.click();
    println!("You speak with {}.", target.name().npc_style());
    true
}

/// Pick up (`carried == true`) or put down an item.
pub fn carry_handler(quest: &mut Quest, item: &str, carried: bool) -> bool {
    let Some(target) = quest.context_mut().item_mut(&Symbol::new(item)) else {
        return not_found("item", item);
    };
    if target.carried() == carried {
        let state = if carried { "already carrying" } else { "not carrying" };
        println!("You are {state} the {}.", target.name().item_style());
        return false;
    }
    target.set_carried(carried);
    let verb = if carried { "take" } else { "drop" };
    println!("You {verb} the {}.", target.name().item_style());
    true
}
