//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hooks-playground/`, `~/.cache/hooks-playground/`, `~/.local/share/hooks-playground/`
//! - macOS: `~/Library/Application Support/hooks-playground/`, `~/Library/Caches/hooks-playground/`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hooks-playground";
const LOCAL_STORAGE_FILE: &str = "local-storage.json";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    ensure_dir(base.join(APP_NAME))
}

/// Get the application cache directory (log files in release builds)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    ensure_dir(base.join(APP_NAME))
}

/// Get the application data directory
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    ensure_dir(base.join(APP_NAME))
}

/// Get path to the local storage file
pub fn local_storage_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOCAL_STORAGE_FILE))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_local_storage_path() {
        let path = local_storage_path().unwrap();
        assert!(path.ends_with(LOCAL_STORAGE_FILE));
        assert!(path.parent().unwrap().ends_with(APP_NAME));
    }
}
