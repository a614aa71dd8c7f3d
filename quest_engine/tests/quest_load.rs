use std::fs;
use std::path::{Path, PathBuf};

use quest_engine::{GrammarRegistry, ParseError, Symbol, TaskStatus, load_quest, repl::handle_command};
use quest_engine::{EngineConfig, command::parse_command};

fn bundled_quest() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/quests/marauder_ambush.toml")
}

fn write_quest(dir: &Path, tasks: &str) -> PathBuf {
    let path = dir.join("quest.toml");
    let text = format!(
        r#"
[quest]
name = "scratch"

[[foes]]
symbol = "Rats"
name = "rats"
max_hp = 2
count = 2

{tasks}
"#
    );
    fs::write(&path, text).expect("write quest");
    path
}

#[test]
fn bundled_quest_loads() {
    let registry = GrammarRegistry::builtin().expect("registry");
    let quest = load_quest(&bundled_quest(), &registry).expect("bundled quest");
    assert_eq!(quest.name, "marauder_ambush");
    assert_eq!(quest.tasks().len(), 6);
    assert!(quest.tasks().iter().all(|t| !t.actions.is_empty()));
}

#[test]
fn bundled_quest_plays_to_the_end() {
    let registry = GrammarRegistry::builtin().expect("registry");
    let mut quest = load_quest(&bundled_quest(), &registry).expect("bundled quest");
    let config = EngineConfig::default();
    let script = [
        "click npc Innkeeper",
        "hit Marauder_Leader 5",
        "kill Marauders",
        "kill Marauders",
        "kill Marauders",
        "kill Marauder_Leader",
        "take Sealed_Letter",
    ];
    for line in script {
        handle_command(&mut quest, parse_command(line), &config);
    }
    for symbol in [
        "_briefed_",
        "_leader_wounded_",
        "_rabble_routed_",
        "_leader_down_",
        "_letter_found_",
        "_delivered_",
    ] {
        assert_eq!(quest.task_status(&Symbol::new(symbol)), Some(TaskStatus::Triggered), "{symbol}");
    }
    assert!(quest.is_ended());
    assert_eq!(quest.state().log.len(), 5);
    assert_eq!(quest.state().tick, 7);
}

#[test]
fn bad_line_names_task_and_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_quest(
        dir.path(),
        r#"
[[tasks]]
symbol = "_rats_"
actions = ["killed 2 Rats", "-- then", "shout loudly"]
"#,
    );
    let registry = GrammarRegistry::builtin().expect("registry");
    let err = load_quest(&path, &registry).expect_err("bad line");
    let chain = format!("{err:#}");
    assert!(chain.contains("task '_rats_', line 3: 'shout loudly'"), "{chain}");
    assert!(err.downcast_ref::<ParseError>().is_some());
}

#[test]
fn missing_file_and_bad_toml_are_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = GrammarRegistry::builtin().expect("registry");
    assert!(load_quest(&dir.path().join("absent.toml"), &registry).is_err());

    let path = dir.path().join("broken.toml");
    fs::write(&path, "[quest\nname = ").expect("write");
    let err = load_quest(&path, &registry).expect_err("bad toml");
    assert!(format!("{err:#}").contains("parsing quest TOML"));
}

#[test]
fn validation_errors_are_aggregated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_quest(
        dir.path(),
        r#"
[[items]]
symbol = "Rats"
name = "rat trap"

[[tasks]]
symbol = "bad symbol"
actions = ["killed Rats"]
"#,
    );
    let registry = GrammarRegistry::builtin().expect("registry");
    let err = load_quest(&path, &registry).expect_err("invalid");
    let chain = format!("{err:#}");
    assert!(chain.contains("quest validation failed"), "{chain}");
    assert!(chain.matches("\n- ").count() >= 2, "{chain}");
}
