//! Read-eval-print loop driving one quest.
//!
//! Every command that changes the world (a hit, a click, a removal) is followed by exactly
//! one quest tick, so its consequences show up right away. `tick [n]` advances time without
//! touching anything.

mod input;
pub mod system;
pub mod world;

pub use system::*;
pub use world::*;

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::command::{Command, parse_command};
use crate::style::QuestStyle;
use crate::{EngineConfig, Quest, TickReport};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the loop until the user quits, input ends, or the quest ends.
///
/// # Errors
/// - if reading from the terminal fails outright
pub fn run_repl(quest: &mut Quest, config: &EngineConfig) -> Result<()> {
    let mut input_manager = InputManager::new();
    loop {
        let prompt = format!(
            "\n[Tick: {}|Tasks: {}/{}]>> ",
            quest.state().tick,
            quest.state().tasks.triggered_count(),
            quest.tasks().len()
        );
        let line = match input_manager.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("Command canceled.");
                continue;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        if handle_command(quest, parse_command(&line), config) == ReplControl::Quit {
            break;
        }
    }
    info!("leaving quest '{}' at tick {}", quest.name, quest.state().tick);
    Ok(())
}

/// Carry out one command, ticking the quest afterwards if the world changed.
pub fn handle_command(quest: &mut Quest, command: Command, config: &EngineConfig) -> ReplControl {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    let changed = match command {
        Tick(n) => {
            tick_handler(quest, n, config);
            false
        },
        Hit { foe, amount } => hit_handler(quest, &foe, amount),
        Kill(foe) => kill_handler(quest, &foe),
        Recover(foe) => recover_handler(quest, &foe),
        Remove(symbol) => remove_handler(quest, &symbol),
        ClickItem(item) => click_item_handler(quest, &item),
        ClickNpc(person) => click_npc_handler(quest, &person),
        Take(item) => carry_handler(quest, &item, true),
        Drop(item) => carry_handler(quest, &item, false),
        Status => {
            status_handler(quest, config);
            false
        },
        Help => {
            help_handler();
            false
        },
        Quit => return ReplControl::Quit,
        Unknown => {
            println!("{}", "Didn't quite catch that. Try 'help'.".error_style());
            false
        },
    };
    if changed {
        let report = quest.tick();
        print_report(&report);
    }
    if quest.is_ended() {
        println!("\n{}", format!("{} is complete.", quest.title).title_style());
        return ReplControl::Quit;
    }
    ReplControl::Continue
}

/// Print the tasks and messages produced by one tick.
pub fn print_report(report: &TickReport) {
    for task in &report.triggered {
        println!("{} task {} triggered", "*".triggered_style(), task.as_str().task_style());
    }
    for message in &report.messages {
        println!("{}", message.message_style());
    }
    if report.ended {
        println!("{}", "The quest has ended.".bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestAction, QuestContext, Symbol, Task, TaskStatus, resource::Foe};

    fn quest() -> Quest {
        let mut ctx = QuestContext::new();
        ctx.insert_foe(Foe::new("Wolf".into(), "grey wolf", 10, 1));
        ctx.insert_message(1, "The wolf yelps.");
        let tasks = vec![
            Task::new(
                "_hurt_".into(),
                vec![QuestAction::InjuredFoe { foe: "Wolf".into() }, QuestAction::Say { message: 1 }],
            ),
            Task::new(
                "_dead_".into(),
                vec![
                    QuestAction::KilledFoe {
                        foe: "Wolf".into(),
                        count: 1,
                    },
                    QuestAction::EndQuest,
                ],
            ),
        ];
        Quest::new("hunt", "The Hunt", ctx, tasks)
    }

    #[test]
    fn world_commands_tick_once() {
        let mut quest = quest();
        let config = EngineConfig::default();
        let control = handle_command(&mut quest, parse_command("hit Wolf 3"), &config);
        assert_eq!(control, ReplControl::Continue);
        assert_eq!(quest.state().tick, 1);
        assert_eq!(quest.task_status(&Symbol::new("_hurt_")), Some(TaskStatus::Triggered));
    }

    #[test]
    fn status_and_unknown_do_not_tick() {
        let mut quest = quest();
        let config = EngineConfig::default();
        handle_command(&mut quest, Command::Status, &config);
        handle_command(&mut quest, Command::Unknown, &config);
        handle_command(&mut quest, parse_command("hit Nobody 1"), &config);
        assert_eq!(quest.state().tick, 0);
    }

    #[test]
    fn ending_the_quest_stops_the_loop() {
        let mut quest = quest();
        let config = EngineConfig::default();
        let control = handle_command(&mut quest, parse_command("kill Wolf"), &config);
        assert_eq!(control, ReplControl::Quit);
        assert!(quest.is_ended());
    }
}
