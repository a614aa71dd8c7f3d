//! Loader utilities for building a [`Quest`] from a quest TOML file.
//!
//! Resources and messages are built straight from the deserialized `QuestDef`. Task action
//! lines are parsed with the grammar registry handed in by the caller; one bad line aborts
//! the whole quest.

pub mod resources;
pub mod tasks;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use quest_data::QuestDef;

use crate::loader::resources::build_context;
use crate::loader::tasks::{build_tasks, warn_unresolved};
use crate::{GrammarRegistry, Quest};

/// Load, validate and build a quest from a TOML file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation or unparseable task lines.
pub fn load_quest(path: &Path, registry: &GrammarRegistry) -> Result<Quest> {
    let def = load_quest_def(path)?;
    build_quest(&def, registry).with_context(|| format!("while building quest from '{}'", path.display()))
}

/// Read and deserialize a `QuestDef` without building it.
///
/// # Errors
/// - if the file cannot be read or is not a valid quest definition
pub fn load_quest_def(path: &Path) -> Result<QuestDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading quest file '{}'", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing quest TOML from '{}'", path.display()))
}

/// Validate a `QuestDef` and turn it into a runnable quest.
///
/// # Errors
/// - if validation fails (all problems are listed) or a task line matches no grammar
pub fn build_quest(def: &QuestDef, registry: &GrammarRegistry) -> Result<Quest> {
    validate_questdef(def)?;
    let context = build_context(def);
    info!("{} foes added to quest '{}'", context.foes().count(), def.quest.name);
    info!("{} items added to quest '{}'", context.items().count(), def.quest.name);
    info!("{} persons added to quest '{}'", context.persons().count(), def.quest.name);

    let tasks = build_tasks(def, registry, &context)?;
    info!("{} tasks added to quest '{}'", tasks.len(), def.quest.name);
    warn_unresolved(&tasks, &context);

    let title = if def.quest.title.is_empty() {
        def.quest.name.clone()
    } else {
        def.quest.title.clone()
    };
    Ok(Quest::new(def.quest.name.clone(), title, context, tasks))
}

/// Validate the quest definition and return a single aggregated error.
fn validate_questdef(def: &QuestDef) -> Result<()> {
    let errors = quest_data::validate_quest(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("quest validation failed:\n{details}");
}
