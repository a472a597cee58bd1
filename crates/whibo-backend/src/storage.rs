//! Local key-value storage that survives restarts.
//!
//! Values are opaque strings addressed by key, the same contract a browser's
//! local storage offers. [`FileStorage`] keeps every key in one JSON object
//! on disk; [`MemoryStorage`] is used when nothing should touch the disk.

use std::{
    collections::{BTreeMap, HashMap},
    io,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use async_trait::async_trait;
use tokio::{
    fs::{File, create_dir_all, read_to_string, rename},
    io::AsyncWriteExt,
};

/// Errors that can occur while reading or writing local storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage file could not be read or written.
    #[error("failed to access storage file: {0}")]
    IoError(#[from] io::Error),
    /// The storage file exists but is not a JSON object of strings.
    #[error("failed to parse storage file: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// String key-value store.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage backed by a single JSON file.
///
/// Writes go to a `.part` sibling first and are renamed into place, so the
/// main file always holds a complete object.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn part_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".part");
        PathBuf::from(name)
    }

    async fn read_items(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }

    async fn read_items_for_update(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_items().await {
            Err(StorageError::JsonError(error)) => {
                log::warn!("Discarding unreadable storage file {:?}: {error}", self.path);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(items)?;

        let part_path = self.part_path();
        let mut file = File::create(&part_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        rename(&part_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl LocalStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_items().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_items_for_update().await?;
        items.insert(key.to_owned(), value.to_owned());
        self.write_items(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_items_for_update().await?;
        if items.remove(key).is_some() {
            self.write_items(&items).await?;
        }
        Ok(())
    }
}

/// Process-local storage; contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}
