//! Engine configuration.
//!
//! Read from `quest_engine.toml` in the data directory. Every field has a default, and a
//! missing file is the same as an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data_paths::data_path;

pub const CONFIG_FILE: &str = "quest_engine.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quest loaded when none is given on the command line, relative to the data directory.
    pub default_quest: Option<PathBuf>,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Upper bound for `tick <n>`.
    pub max_ticks_per_command: u32,
    pub show_task_status: bool,
    /// File the config was read from; `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_quest: None,
            log_filter: "info".to_string(),
            max_ticks_per_command: 100,
            show_task_status: true,
            source: None,
        }
    }
}

impl EngineConfig {
    /// Load the config from the data directory.
    ///
    /// # Errors
    /// - if the file exists but cannot be read or parsed
    pub fn load() -> Result<EngineConfig> {
        EngineConfig::load_from(&data_path(CONFIG_FILE))
    }

    /// Load the config from an explicit path; a missing file yields the defaults.
    ///
    /// # Errors
    /// - if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<EngineConfig> {
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        let text = fs::read_to_string(path).with_context(|| format!("reading config from '{}'", path.display()))?;
        let mut config: EngineConfig =
            toml::from_str(&text).with_context(|| format!("parsing config TOML from '{}'", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// The default quest resolved against the data directory.
    pub fn default_quest_path(&self) -> Option<PathBuf> {
        self.default_quest.as_ref().map(data_path)
    }
}
