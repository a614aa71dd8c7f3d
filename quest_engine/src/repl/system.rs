//! `repl::system` module
//!
//! Handlers for commands that inspect the quest or advance time without touching it.

use colored::Colorize;
use log::{info, warn};

use crate::repl::print_report;
use crate::style::QuestStyle;
use crate::{EngineConfig, Quest, QuestResource, TaskStatus};

/// Advance the quest `n` ticks, capped by the configured limit.
///
/// Stops early if the quest ends. Returns the number of ticks actually run.
pub fn tick_handler(quest: &mut Quest, n: u32, config: &EngineConfig) -> u32 {
    let ticks = if n > config.max_ticks_per_command {
        warn!("tick {n} capped at {}", config.max_ticks_per_command);
        println!(
            "{}",
            format!("Only {} ticks at a time.", config.max_ticks_per_command).denied_style()
        );
        config.max_ticks_per_command
    } else {
        n
    };
    let mut ran = 0;
    while ran < ticks && !quest.is_ended() {
        let report = quest.tick();
        print_report(&report);
        ran += 1;
    }
    info!("{ran} ticks run, quest now at tick {}", quest.state().tick);
    ran
}

/// Print every resource, sorted by symbol, and optionally every task.
pub fn status_handler(quest: &Quest, config: &EngineConfig) {
    let ctx = quest.context();
    println!("{} {}", quest.title.title_style(), format!("(tick {})", quest.state().tick).dimmed());

    let mut foes: Vec<_> = ctx.foes().collect();
    foes.sort_by(|a, b| a.symbol().cmp(b.symbol()));
    println!("{}", "Foes".section_style());
    for foe in foes {
        let injured = if foe.injured_trigger() { ", injured" } else { "" };
        println!(
            "  {} {}/{} hp, {} of {} killed{injured}",
            foe.symbol().as_str().foe_style(),
            foe.current_hp(),
            foe.max_hp(),
            foe.killed_count(),
            foe.count()
        );
    }

    let mut items: Vec<_> = ctx.items().collect();
    items.sort_by(|a, b| a.symbol().cmp(b.symbol()));
    println!("{}", "Items".section_style());
    for item in items {
        println!(
            "  {} clicked: {}, carried: {}",
            item.symbol().as_str().item_style(),
            item.clicked(),
            item.carried()
        );
    }

    let mut persons: Vec<_> = ctx.persons().collect();
    persons.sort_by(|a, b| a.symbol().cmp(b.symbol()));
    println!("{}", "Persons".section_style());
    for person in persons {
        println!("  {} clicked: {}", person.symbol().as_str().npc_style(), person.clicked());
    }

    if config.show_task_status {
        println!("{}", "Tasks".section_style());
        for task in quest.tasks() {
            let status = match quest.task_status(&task.symbol) {
                Some(TaskStatus::Triggered) => "triggered".triggered_style(),
                _ => "dormant".normal(),
            };
            let note = task.note.as_deref().unwrap_or_default();
            println!("  {} {status} {}", task.symbol.as_str().task_style(), note.dimmed());
        }
    }
}

pub fn help_handler() {
    println!("{}", "Commands".subheading_style());
    let commands = [
        ("tick [n]", "advance time n ticks (default 1)"),
        ("hit <foe> <amount>", "damage the current individual of a foe"),
        ("kill <foe>", "kill the current individual outright"),
        ("recover <foe>", "heal a foe and clear its injury"),
        ("remove <symbol>", "take any resource out of the quest"),
        ("click item <item>", "examine an item"),
        ("click npc <person>", "talk to a person"),
        ("take <item>", "start carrying an item"),
        ("drop <item>", "stop carrying an item"),
        ("status", "show resources and tasks"),
        ("quit", "leave the quest"),
    ];
    for (usage, what) in commands {
        println!("  {:<20} {what}", usage.bold());
    }
}
