//! Application context shared by the helper, its services and timer tasks.
//!
//! The context contains the shared state and provides helpers for sending
//! page snapshots and responses back to the frontend bridge.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use whibo_bridge::MessageFromBackend;
use whibo_page::DocumentSnapshot;

use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Send a message to the frontend bridge. A closed bridge only loses the
    /// message.
    pub async fn send(&self, message: MessageFromBackend) {
        if let Err(error) = self.tx.send(message).await {
            log::warn!("Dropped a message for the frontend: {error}");
        }
    }

    /// Push a fresh page snapshot to the frontend.
    pub async fn publish(&self, snapshot: DocumentSnapshot) {
        self.send(MessageFromBackend::PageUpdate(Arc::new(snapshot)))
            .await;
    }
}
