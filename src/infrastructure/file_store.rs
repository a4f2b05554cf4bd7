// JSON file preference store
use crate::application::preference_store::PreferenceStore;
use anyhow::Context;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file {path} is not a JSON object of strings: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Preferences persisted as a flat JSON object. The file is loaded lazily on
/// first access and rewritten whole on every `set`.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    cache: RwLock<Option<BTreeMap<String, String>>>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_file(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(values).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, json).await.map_err(io_error)
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if let Some(values) = self.cache.read().await.as_ref() {
            return Ok(values.get(key).cloned());
        }

        let mut cache = self.cache.write().await;
        if cache.is_none() {
            let values = self.read_file().await.context("Failed to load preferences")?;
            *cache = Some(values);
        }

        Ok(cache.as_ref().and_then(|values| values.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut cache = self.cache.write().await;
        let mut values = match cache.as_ref() {
            Some(values) => values.clone(),
            None => self.read_file().await.context("Failed to load preferences")?,
        };

        values.insert(key.to_string(), value.to_string());
        self.write_file(&values)
            .await
            .context("Failed to save preferences")?;

        // Only a persisted map becomes visible to readers.
        *cache = Some(values);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("app-theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_a_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let store = FilePreferenceStore::new(&path);
        store.set("app-theme", "dark").await.unwrap();
        store.set("language", "hi").await.unwrap();
        assert_eq!(store.get("app-theme").await.unwrap().as_deref(), Some("dark"));

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(reopened.get("app-theme").await.unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("language").await.unwrap().as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FilePreferenceStore::new(&path);
        let err = store.get("app-theme").await.unwrap_err();
        assert!(err.downcast_ref::<StoreError>().is_some());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("nested");
        let store = FilePreferenceStore::new(parent.join("preferences.json"));
        store.set("app-theme", "light").await.unwrap();

        // A plain file where the directory used to be makes the next write fail.
        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "not a directory").unwrap();

        let err = store.set("app-theme", "dark").await.unwrap_err();
        assert!(err.downcast_ref::<StoreError>().is_some());
        assert_eq!(store.get("app-theme").await.unwrap().as_deref(), Some("light"));
    }
}
