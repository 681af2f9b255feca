//! Key/value store persisted as a flat JSON object
//!
//! Every write goes straight to disk, so the file always mirrors memory.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse local storage {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No local storage at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read local storage {}", path.display()))
            }
        };

        Ok(Self { path, items })
    }

    /// Open the store at the default data location
    pub fn open_default() -> Result<Self> {
        Self::open(crate::local_storage_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write local storage {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_path(dir: &TempDir) -> PathBuf {
        dir.path().join("local-storage.json")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::open(storage_path(&dir)).unwrap();
        assert_eq!(storage.get_item("search"), None);
    }

    #[test]
    fn test_set_item_persists() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);
        let mut storage = LocalStorage::open(&path).unwrap();
        storage.set_item("search", "Redux").unwrap();
        assert_eq!(storage.get_item("search"), Some("Redux"));

        let reopened = LocalStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("search"), Some("Redux"));
    }

    #[test]
    fn test_remove_item() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);
        let mut storage = LocalStorage::open(&path).unwrap();
        storage.set_item("search", "React").unwrap();
        storage.remove_item("search").unwrap();
        storage.remove_item("never-set").unwrap();

        let reopened = LocalStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("search"), None);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);
        std::fs::write(&path, "not json").unwrap();
        assert!(LocalStorage::open(&path).is_err());
    }

    #[test]
    fn test_files_live_inside_temp_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        let mut storage = LocalStorage::open(storage_path(&dir)).unwrap();
        storage.set_item("search", "React").unwrap();
        assert!(storage.path().starts_with(&root));

        drop(storage);
        dir.close().unwrap();
        assert!(!root.exists());
    }
}
