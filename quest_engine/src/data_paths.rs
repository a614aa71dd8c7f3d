//! Data directory resolution.
//!
//! `QUEST_ENGINE_DATA` wins when set. Otherwise the first existing directory among the
//! usual layouts (run from the workspace root, from the crate, or next to the binary) is
//! used. The result is resolved once per process.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, warn};

/// Environment variable naming the data directory explicitly.
pub const DATA_DIR_ENV: &str = "QUEST_ENGINE_DATA";

const FALLBACK_ROOT: &str = "quest_engine/data";

static DATA_ROOT: LazyLock<PathBuf> =
    LazyLock::new(|| resolve_data_root(env::var_os(DATA_DIR_ENV).map(PathBuf::from), &default_candidates()));

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Candidate roots, tried in order.
fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(FALLBACK_ROOT), PathBuf::from("data")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(FALLBACK_ROOT));
        }
    }
    candidates
}

/// Pick the data root: an explicit override if it is a directory, else the first existing
/// candidate, else the workspace layout.
fn resolve_data_root(explicit: Option<PathBuf>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(dir) = explicit {
        if dir.is_dir() {
            debug!("data root from {DATA_DIR_ENV}: '{}'", dir.display());
            return dir;
        }
        warn!("{DATA_DIR_ENV} points at '{}', which is not a directory; using the default layouts", dir.display());
    }
    candidates
        .iter()
        .find(|candidate| candidate.is_dir())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(FALLBACK_ROOT))
}
