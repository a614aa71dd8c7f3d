#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const QUEST_ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod command;
pub mod config;
pub mod context;
pub mod data_paths;
pub mod health;
pub mod loader;
pub mod quest;
pub mod repl;
pub mod resource;
pub mod style;
pub mod symbol;
pub mod task;

// Re-exports for convenience
pub use action::{
    ActionGrammar, GrammarError, GrammarRegistry, ParseError, ParseOutcome, QuestAction, TickContext,
    create_from_source, parse,
};
pub use config::EngineConfig;
pub use context::QuestContext;
pub use loader::load_quest;
pub use quest::{Quest, TickReport};
pub use resource::{Foe, Item, Person, QuestResource, Resource, ResourceLookup};
pub use symbol::Symbol;
pub use task::{QuestState, Task, TaskStates, TaskStatus};
