//! Config file lookup
//!
//! Candidates, first readable one wins:
//! 1. `.hooks-playground.toml` in the current directory
//! 2. `config.toml` in the platform config directory
//! 3. `~/.hooks-playground.toml`

use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".hooks-playground.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Load config file content from the first candidate location that exists
pub fn load_config_file() -> Option<String> {
    read_first(&candidate_paths())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

    match crate::config_dir() {
        Ok(dir) => paths.push(dir.join(GLOBAL_CONFIG_FILE)),
        Err(e) => log::debug!("Skipping config directory: {:#}", e),
    }

    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(LOCAL_CONFIG_FILE));
    }

    paths
}

fn read_first(paths: &[PathBuf]) -> Option<String> {
    paths.iter().find_map(|path| read_config(path))
}

fn read_config(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}
