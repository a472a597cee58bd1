use std::{fmt, sync::Arc};

use whibo_bridge::history::DownloadRecord;

use crate::storage::{LocalStorage, StorageError};

/// Newest-first list of completed downloads, mirrored into local storage
/// under a single key.
pub struct DownloadHistory {
    storage: Arc<dyn LocalStorage>,
    key: String,
    limit: usize,
    entries: Vec<DownloadRecord>,
}

impl fmt::Debug for DownloadHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadHistory")
            .field("key", &self.key)
            .field("limit", &self.limit)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl DownloadHistory {
    /// Loads the persisted list. Missing or unparsable data yields an empty
    /// history.
    pub async fn load(
        storage: Arc<dyn LocalStorage>,
        key: impl Into<String>,
        limit: usize,
    ) -> Self {
        let key = key.into();
        let entries = read_records(storage.as_ref(), &key).await;
        Self {
            storage,
            key,
            limit,
            entries,
        }
    }

    pub fn entries(&self) -> &[DownloadRecord] {
        &self.entries
    }

    /// Prepends `record`, drops everything past the limit and writes the
    /// whole list back.
    pub async fn track(&mut self, record: DownloadRecord) -> Result<(), StorageError> {
        self.entries.insert(0, record);
        self.entries.truncate(self.limit);

        let blob = serde_json::to_string(&self.entries)?;
        self.storage.set_item(&self.key, &blob).await
    }

    /// Reads the list straight from storage instead of the in-memory copy.
    pub async fn read_persisted(&self) -> Vec<DownloadRecord> {
        read_records(self.storage.as_ref(), &self.key).await
    }
}

async fn read_records(storage: &dyn LocalStorage, key: &str) -> Vec<DownloadRecord> {
    match storage.get_item(key).await {
        Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|error| {
            log::warn!("Ignoring malformed download history under {key:?}: {error}");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(error) => {
            log::warn!("Failed to read download history: {error}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn record(n: usize) -> DownloadRecord {
        DownloadRecord::completed(format!("video_{n}.mp4"), format!("id-{n}"), "720p", Utc::now())
    }

    #[tokio::test]
    async fn keeps_only_the_newest_entries() {
        let storage = Arc::new(MemoryStorage::new());
        let mut history = DownloadHistory::load(storage.clone(), "whibo_downloads", 50).await;

        for n in 1..=51 {
            history.track(record(n)).await.unwrap();
        }

        let persisted = history.read_persisted().await;
        assert_eq!(persisted.len(), 50);
        assert_eq!(persisted[0].download_id, "id-51");
        assert_eq!(persisted[49].download_id, "id-2");
        assert!(persisted.iter().all(|r| r.download_id != "id-1"));
        assert_eq!(history.entries(), persisted.as_slice());
    }

    #[tokio::test]
    async fn empty_storage_gives_empty_history() {
        let storage = Arc::new(MemoryStorage::new());
        let history = DownloadHistory::load(storage, "whibo_downloads", 50).await;
        assert!(history.entries().is_empty());
        assert!(history.read_persisted().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_blob_is_treated_as_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item("whibo_downloads", "{\"not\": \"a list\"}").await.unwrap();

        let mut history = DownloadHistory::load(storage.clone(), "whibo_downloads", 50).await;
        assert!(history.entries().is_empty());

        history.track(record(1)).await.unwrap();
        assert_eq!(history.read_persisted().await.len(), 1);
    }

    #[tokio::test]
    async fn loads_previously_persisted_entries() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut history = DownloadHistory::load(storage.clone(), "whibo_downloads", 50).await;
            history.track(record(1)).await.unwrap();
            history.track(record(2)).await.unwrap();
        }

        let history = DownloadHistory::load(storage, "whibo_downloads", 50).await;
        let ids: Vec<_> = history.entries().iter().map(|r| r.download_id.as_str()).collect();
        assert_eq!(ids, vec!["id-2", "id-1"]);
    }
}
