//! Backend runtime entry point and public API surface.
//!
//! This crate owns the page session: it routes bridge messages to the
//! [`ClientUiHelper`], keeps the download history in local storage and runs
//! the timers behind alerts and notifications.

mod app;
mod config;
mod helper;
pub mod formatting;
pub mod history;
pub mod page;
mod runtime;
mod services;
mod state;
pub mod storage;
pub mod validation;

pub use crate::config::{ConfigError, load_config, load_config_from};
pub use crate::formatting::format_file_size;
pub use crate::helper::{ClientUiHelper, Notifier};
pub use crate::runtime::run;
pub use crate::state::{SharedState, State};
pub use crate::validation::is_valid_video_url;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc::{self, Receiver};
    use whibo_bridge::{MessageFromBackend, config::Config};
    use whibo_page::Document;

    use crate::{ClientUiHelper, State, storage::MemoryStorage};

    pub(crate) async fn helper_with_config(
        config: Config,
    ) -> (ClientUiHelper, Receiver<MessageFromBackend>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let (tx, rx) = mpsc::channel(256);
        let helper = ClientUiHelper::new(State::new(config, storage.clone()).await.unwrap(), tx);
        (helper, rx, storage)
    }

    pub(crate) async fn helper_with_document(
        document: Document,
    ) -> (ClientUiHelper, Receiver<MessageFromBackend>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let (tx, rx) = mpsc::channel(256);
        let state = State::with_document(Config::default(), document, storage.clone()).await;
        (ClientUiHelper::new(state, tx), rx, storage)
    }

    /// Everything sent to the frontend so far.
    pub(crate) fn drain(rx: &mut Receiver<MessageFromBackend>) -> Vec<MessageFromBackend> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    impl ClientUiHelper {
        pub(crate) async fn with_document<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
            let context = self.context();
            let state = context.state.read().await;
            f(&state.document)
        }

        pub(crate) async fn with_document_mut<R>(
            &self,
            f: impl FnOnce(&mut Document) -> R,
        ) -> R {
            let context = self.context();
            let mut state = context.state.write().await;
            f(&mut state.document)
        }
    }
}
