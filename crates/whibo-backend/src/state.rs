use std::sync::Arc;

use whibo_bridge::config::Config;
use whibo_page::{Document, PageError};

use crate::{history::DownloadHistory, storage::LocalStorage};

/// Everything the helper owns for the lifetime of a page session: the
/// configuration, the page itself and the download history.
///
/// Wrapped in [`SharedState`] so every callback and timer task mutates it
/// under one lock.
#[derive(Debug)]
pub struct State {
    /// The loaded application configuration.
    pub config: Config,
    /// The page the helper renders into.
    pub document: Document,
    /// Completed downloads, newest first, mirrored into local storage.
    pub history: DownloadHistory,
}

impl State {
    /// Builds the default download page and loads the history from `storage`.
    pub async fn new(config: Config, storage: Arc<dyn LocalStorage>) -> Result<Self, PageError> {
        let document = crate::page::build_download_page(&config.page)?;
        Ok(Self::with_document(config, document, storage).await)
    }

    /// Like [`State::new`] but with a caller-provided page.
    pub async fn with_document(
        config: Config,
        document: Document,
        storage: Arc<dyn LocalStorage>,
    ) -> Self {
        let history =
            DownloadHistory::load(storage, config.storage_key.clone(), config.history_limit)
                .await;
        Self {
            config,
            document,
            history,
        }
    }
}

/// Async-friendly shared reference to the application [`State`].
pub type SharedState = Arc<tokio::sync::RwLock<State>>;
