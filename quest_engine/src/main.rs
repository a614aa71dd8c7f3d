#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Quest Engine **
//! Runs a quest file interactively: load it, poke its resources, and watch tasks trigger.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use quest_engine::style::QuestStyle;
use quest_engine::{EngineConfig, GrammarRegistry, QUEST_ENGINE_VERSION, load_quest, repl::run_repl};

#[derive(Debug, Parser)]
#[command(name = "quest_engine", version, about = "Run a quest action script interactively")]
struct Cli {
    /// Quest TOML file. Defaults to `default_quest` from quest_engine.toml.
    quest: Option<PathBuf>,
    /// Load and validate the quest, print a summary, and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::load().context("while loading engine config")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter)).init();
    info!("Start: quest_engine {QUEST_ENGINE_VERSION}");
    match &config.source {
        Some(path) => info!("engine config loaded from '{}'", path.display()),
        None => info!("no engine config found, using defaults"),
    }

    let registry = GrammarRegistry::builtin().context("while registering built-in grammars")?;
    let quest_path = cli
        .quest
        .or_else(|| config.default_quest_path())
        .context("no quest file given and no default_quest configured")?;
    let mut quest =
        load_quest(&quest_path, &registry).with_context(|| format!("while loading quest '{}'", quest_path.display()))?;
    info!(
        "[{}] quest '{}' loaded with {} tasks",
        quest.instance_id,
        quest.name,
        quest.tasks().len()
    );

    println!("{:^60}", quest.title.title_style());
    println!(
        "{} foes, {} items, {} persons, {} tasks",
        quest.context().foes().count(),
        quest.context().items().count(),
        quest.context().persons().count(),
        quest.tasks().len()
    );
    if cli.check {
        return Ok(());
    }
    println!("Type 'help' for commands.");
    run_repl(&mut quest, &config)
}
