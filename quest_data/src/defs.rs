use serde::{Deserialize, Serialize};

/// Symbolic identifier used for cross-references inside one quest definition.
pub type SymbolName = String;

/// Top-level quest definition as authored in a quest TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestDef {
    pub quest: QuestMeta,
    #[serde(default)]
    pub foes: Vec<FoeDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub persons: Vec<PersonDef>,
    #[serde(default)]
    pub messages: Vec<MessageDef>,
    #[serde(default)]
    pub tasks: Vec<TaskDef>,
}

/// Quest-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestMeta {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// A hostile creature (or group of identical creatures) referenced by the quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoeDef {
    pub symbol: SymbolName,
    pub name: String,
    pub max_hp: u32,
    /// Number of individuals that make up this foe resource.
    #[serde(default = "default_foe_count")]
    pub count: u32,
}

fn default_foe_count() -> u32 {
    1
}

/// An item the quest tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub symbol: SymbolName,
    pub name: String,
    #[serde(default)]
    pub carried: bool,
}

/// A non-hostile character the quest tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDef {
    pub symbol: SymbolName,
    pub name: String,
}

/// A numbered line of quest text, referenced by `say <id>` actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDef {
    pub id: u32,
    pub text: String,
}

/// A task: a named, ordered list of action source lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDef {
    pub symbol: SymbolName,
    #[serde(default)]
    pub note: Option<String>,
    pub actions: Vec<String>,
}

impl QuestDef {
    /// Every resource and task symbol in declaration order, tagged with its kind.
    pub fn symbols(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let foes = self.foes.iter().map(|f| ("foe", f.symbol.as_str()));
        let items = self.items.iter().map(|i| ("item", i.symbol.as_str()));
        let persons = self.persons.iter().map(|p| ("person", p.symbol.as_str()));
        let tasks = self.tasks.iter().map(|t| ("task", t.symbol.as_str()));
        foes.chain(items).chain(persons).chain(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_def_reads_from_toml_with_defaults() {
        let text = r#"
            [quest]
            name = "ambush"

            [[foes]]
            symbol = "Marauder_Leader"
            name = "Marauder leader"
            max_hp = 30

            [[tasks]]
            symbol = "_wounded_"
            actions = ["injured Marauder_Leader"]
        "#;
        let def: QuestDef = toml::from_str(text).expect("quest toml");
        assert_eq!(def.quest.name, "ambush");
        assert!(def.quest.title.is_empty());
        assert_eq!(def.foes[0].count, 1);
        assert!(def.items.is_empty());
        assert_eq!(def.tasks[0].actions, vec!["injured Marauder_Leader".to_string()]);
    }

    #[test]
    fn symbols_lists_every_kind_in_order() {
        let def = QuestDef {
            foes: vec![FoeDef {
                symbol: "f".into(),
                name: "F".into(),
                max_hp: 1,
                count: 1,
            }],
            persons: vec![PersonDef {
                symbol: "p".into(),
                name: "P".into(),
            }],
            tasks: vec![TaskDef {
                symbol: "t".into(),
                note: None,
                actions: vec!["end quest".into()],
            }],
            ..QuestDef::default()
        };
        let syms: Vec<_> = def.symbols().collect();
        assert_eq!(syms, vec![("foe", "f"), ("person", "p"), ("task", "t")]);
    }
}
