use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::fs;

use crate::domain::entities::module_list::ModuleList;

/// Config store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// The config file could not be opened or read.
    #[error("failed to open config file '{}': {source}", .path.display())]
    ReadFailed {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The staging temp file could not be created or written.
    #[error("failed to stage config update in '{}': {source}", .dir.display())]
    StageFailed {
        /// Directory the temp file was created in.
        dir: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rename over the config file failed.
    #[error("failed to replace config file '{}': {source}", .path.display())]
    ReplaceFailed {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config path has no parent directory to stage the temp file in.
    #[error("config file path has no parent directory: {}", .path.display())]
    NoParentDir {
        /// The offending path.
        path: PathBuf,
    },
}

/// Reads and rewrites the module config file.
///
/// Rewrites go through a temp file in the config file's own directory,
/// renamed over the original once fully written, so a crash mid-write never
/// leaves a half-written config behind.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new config store.
    pub fn new() -> Self {
        Self
    }

    /// Load the module list from the config file at `path`.
    pub async fn load(&self, path: &Path) -> Result<ModuleList, ConfigStoreError> {
        let contents =
            fs::read_to_string(path)
                .await
                .map_err(|source| ConfigStoreError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                })?;

        Ok(ModuleList::parse(&contents))
    }

    /// Write the module list back to the config file at `path`.
    pub fn store(&self, path: &Path, modules: &ModuleList) -> Result<(), ConfigStoreError> {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| ConfigStoreError::NoParentDir {
                path: path.to_path_buf(),
            })?;

        let stage_failed = |source| ConfigStoreError::StageFailed {
            dir: dir.to_path_buf(),
            source,
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(stage_failed)?;
        temp.write_all(modules.render().as_bytes())
            .map_err(stage_failed)?;

        temp.persist(path)
            .map_err(|e| ConfigStoreError::ReplaceFailed {
                path: path.to_path_buf(),
                source: e.error,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::module_list::ModuleEntry;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_parses_config_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vim-modules.conf");
        std::fs::write(&path, "# comment\nrepo-a\n\nrepo-b # pinned\n").unwrap();

        let list = ConfigStore::new().load(&path).await.unwrap();
        let raw: Vec<&str> = list.iter().map(|e| e.raw()).collect();
        assert_eq!(raw, vec!["repo-a", "repo-b # pinned"]);
    }

    #[tokio::test]
    async fn test_load_missing_file_names_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vim-modules.conf");

        let result = ConfigStore::new().load(&path).await;
        match result {
            Err(ConfigStoreError::ReadFailed { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ReadFailed, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_store_writes_newline_terminated_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vim-modules.conf");

        let mut list = ModuleList::new();
        list.push(ModuleEntry::new("repo-a"));
        list.push(ModuleEntry::new("  repo-b # pinned"));

        ConfigStore::new().store(&path, &list).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "repo-a\n  repo-b # pinned\n");
    }

    #[test]
    fn test_store_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vim-modules.conf");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut list = ModuleList::new();
        list.push(ModuleEntry::new("fresh"));
        ConfigStore::new().store(&path, &list).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_store_leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vim-modules.conf");

        let mut list = ModuleList::new();
        list.push(ModuleEntry::new("repo"));
        ConfigStore::new().store(&path, &list).unwrap();

        let names: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["vim-modules.conf"]);
    }

    #[test]
    fn test_store_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("vim-modules.conf");

        let result = ConfigStore::new().store(&path, &ModuleList::new());
        assert!(matches!(result, Err(ConfigStoreError::StageFailed { .. })));
    }

    #[tokio::test]
    async fn test_store_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vim-modules.conf");

        let list = ModuleList::parse("repo-a\n  repo-b # pinned\n");
        let store = ConfigStore::new();
        store.store(&path, &list).unwrap();

        let loaded = store.load(&path).await.unwrap();
        assert_eq!(loaded, list);
    }
}
