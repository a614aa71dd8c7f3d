//! Command module
//!
//! Commands accepted by the interactive quest driver.
use variantly::Variantly;

/// Commands that can be entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    ClickItem(String),
    ClickNpc(String),
    Drop(String),
    Help,
    Hit { foe: String, amount: u32 },
    Kill(String),
    Quit,
    Recover(String),
    Remove(String),
    Status,
    Take(String),
    Tick(u32),
    Unknown,
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["tick" | "wait"] => Command::Tick(1),
        ["tick" | "wait", n] => n.parse::<u32>().map_or(Command::Unknown, Command::Tick),
        ["hit" | "attack", foe, amount] | ["hit" | "attack", foe, "for", amount] => {
            amount.parse::<u32>().map_or(Command::Unknown, |amount| Command::Hit {
                foe: (*foe).to_string(),
                amount,
            })
        },
        ["kill" | "slay", foe] => Command::Kill((*foe).to_string()),
        ["recover" | "rest", foe] => Command::Recover((*foe).to_string()),
        ["remove" | "despawn", symbol] => Command::Remove((*symbol).to_string()),
        ["click", "item", item] => Command::ClickItem((*item).to_string()),
        ["click", "npc", person] | ["talk", "to", person] => Command::ClickNpc((*person).to_string()),
        ["take" | "get", item] => Command::Take((*item).to_string()),
        ["drop", item] => Command::Drop((*item).to_string()),
        ["status" | "tasks"] => Command::Status,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
