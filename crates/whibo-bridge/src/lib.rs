//! Communication bridge between frontend and backend.
//!
//! This crate defines the types used to connect the graphical frontend with
//! the backend that owns the page and the download history.
//!
//! - The frontend (or any other page code) sends commands: page ready, URL
//!   input, notification and progress requests, download completion.
//! - The backend pushes events: page snapshots, URL validity, save requests,
//!   history responses.
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`].

pub mod config;
pub mod history;
pub mod notification;

use std::sync::Arc;

use tokio::sync::mpsc::{self, Receiver, Sender};
use whibo_page::{DocumentSnapshot, ElementId};

/// Messages emitted by the backend to inform the frontend of state updates.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// The page changed; carries a full snapshot to render.
    PageUpdate(Arc<DocumentSnapshot>),
    /// Result of validating the latest URL input.
    UrlValidity { valid: bool },
    /// The download trigger was activated and the file should be saved.
    SaveRequested {
        download_id: String,
        /// Target of the trigger element, when it carries one.
        href: Option<String>,
    },
    /// Response to [`MessageToBackend::HistoryRequest`].
    HistoryResponse(Vec<history::DownloadRecord>),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
}

/// Commands issued by the frontend, or by other page code, to the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// The page finished loading and is ready for the one-time alert scan.
    PageReady,
    /// New contents of the URL input.
    UrlInput(String),
    ShowNotification(notification::NotificationMessage),
    /// The user closed a toast by hand.
    DismissNotification(ElementId),
    UpdateProgress {
        percentage: f64,
        status_text: String,
        download_id: String,
    },
    DownloadComplete {
        download_id: String,
        filename: String,
    },
    NetworkError(String),
    TrackDownload {
        filename: String,
        download_id: String,
        quality: String,
    },
    HistoryRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
