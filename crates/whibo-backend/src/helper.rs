//! The client UI helper: one owned service object exposing every page
//! operation, plus the capability traits other code depends on.

use std::{future::Future, sync::Arc};

use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};
use whibo_bridge::{
    MessageFromBackend, MessageToBackend,
    history::DownloadRecord,
    notification::{NotificationMessage, NotificationType},
};
use whibo_page::{DocumentSnapshot, ElementId};

use crate::{app::AppContext, services, state::State};

/// Capability to put a notification on screen.
///
/// Handlers that announce something take a `Notifier` instead of reaching
/// for the helper directly.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: NotificationMessage) -> impl Future<Output = ()> + Send;
}

/// Owns the page session: the document, the download history and the
/// outbound channel to the frontend.
///
/// Cloning is cheap; every clone drives the same state.
#[derive(Clone)]
pub struct ClientUiHelper {
    context: Arc<AppContext>,
}

impl ClientUiHelper {
    pub fn new(state: State, tx: Sender<MessageFromBackend>) -> Self {
        Self {
            context: Arc::new(AppContext {
                state: Arc::new(RwLock::new(state)),
                tx,
            }),
        }
    }

    pub(crate) fn context(&self) -> services::AppContextHandle {
        self.context.clone()
    }

    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(&self, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
        log::info!("Frontend bridge closed, stopping the helper");
    }

    /// Dispatches the received message down to the matching operation.
    pub async fn dispatch_message(&self, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(&self.context).await;
            }
            MessageToBackend::PageReady => self.page_ready().await,
            MessageToBackend::UrlInput(text) => self.url_input(&text).await,
            MessageToBackend::ShowNotification(notification) => {
                self.notify(notification).await;
            }
            MessageToBackend::DismissNotification(id) => self.dismiss_notification(id).await,
            MessageToBackend::UpdateProgress {
                percentage,
                status_text,
                download_id,
            } => {
                self.update_progress(percentage, &status_text, &download_id)
                    .await;
            }
            MessageToBackend::DownloadComplete {
                download_id,
                filename,
            } => self.on_download_complete(download_id, filename).await,
            MessageToBackend::NetworkError(error) => self.on_network_error(&error).await,
            MessageToBackend::TrackDownload {
                filename,
                download_id,
                quality,
            } => self.track_download(filename, download_id, quality).await,
            MessageToBackend::HistoryRequest => {
                services::history_service::handle_history_request(&self.context).await;
            }
        }
    }

    /// One-time page-ready work: alert scan and client IP log.
    pub async fn page_ready(&self) {
        services::alert_service::handle_page_ready(self.context()).await;
    }

    /// Input event on the URL field.
    pub async fn url_input(&self, text: &str) {
        services::validation_service::handle_url_input(&self.context, text).await;
    }

    /// Shows a toast and returns its element handle.
    pub async fn show_notification(
        &self,
        message: impl Into<String>,
        notification_type: NotificationType,
    ) -> ElementId {
        services::notification_service::show_notification(
            self.context(),
            NotificationMessage::new(notification_type, message),
        )
        .await
    }

    pub async fn dismiss_notification(&self, id: ElementId) {
        services::notification_service::dismiss_notification(&self.context, id).await;
    }

    pub async fn update_progress(&self, percentage: f64, status_text: &str, download_id: &str) {
        services::progress_service::update_progress(
            &self.context,
            percentage,
            status_text,
            download_id,
        )
        .await;
    }

    pub async fn on_download_complete(
        &self,
        download_id: impl Into<String>,
        filename: impl Into<String>,
    ) {
        services::completion_service::on_download_complete(
            self.context(),
            self.clone(),
            download_id.into(),
            filename.into(),
        )
        .await;
    }

    pub async fn on_network_error(&self, error: &str) {
        services::completion_service::on_network_error(self, error).await;
    }

    pub async fn track_download(
        &self,
        filename: impl Into<String>,
        download_id: impl Into<String>,
        quality: impl Into<String>,
    ) {
        services::history_service::track_download(
            &self.context,
            filename.into(),
            download_id.into(),
            quality.into(),
        )
        .await;
    }

    pub async fn get_history(&self) -> Vec<DownloadRecord> {
        services::history_service::get_history(&self.context).await
    }

    /// Current state of the page.
    pub async fn snapshot(&self) -> DocumentSnapshot {
        self.context.state.read().await.document.snapshot()
    }
}

impl Notifier for ClientUiHelper {
    async fn notify(&self, notification: NotificationMessage) {
        services::notification_service::show_notification(self.context(), notification).await;
    }
}

#[cfg(test)]
mod tests {
    use whibo_bridge::MessageFromBackend;

    use super::*;
    use crate::test_support::{drain, helper_with_config};

    #[tokio::test(start_paused = true)]
    async fn bridge_messages_reach_their_operations() {
        let (helper, mut rx, _) = helper_with_config(Default::default()).await;

        helper
            .dispatch_message(MessageToBackend::TrackDownload {
                filename: "a.mp4".to_owned(),
                download_id: "id-a".to_owned(),
                quality: "480p".to_owned(),
            })
            .await;
        helper.dispatch_message(MessageToBackend::HistoryRequest).await;
        helper
            .dispatch_message(MessageToBackend::ShowNotification(NotificationMessage::info(
                "hello",
            )))
            .await;
        helper
            .dispatch_message(MessageToBackend::NetworkError("timeout".to_owned()))
            .await;
        helper.dispatch_message(MessageToBackend::ConfigurationRequest).await;

        let messages = drain(&mut rx);
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::HistoryResponse(records) if records.len() == 1
        )));
        assert!(
            messages
                .iter()
                .any(|message| matches!(message, MessageFromBackend::ConfigurationResponse(_)))
        );

        let snapshot = helper.snapshot().await;
        let toasts: Vec<_> = snapshot
            .find_by_class("position-fixed")
            .into_iter()
            .map(|node| node.element.text.clone())
            .collect();
        assert_eq!(toasts, vec!["hello", "❌ Network error: timeout"]);
    }

    #[tokio::test(start_paused = true)]
    async fn loop_stops_when_the_bridge_closes() {
        let (helper, _rx, _) = helper_with_config(Default::default()).await;
        let (tx, rx) = tokio::sync::mpsc::channel(8);

        tx.send(MessageToBackend::UrlInput("not a url".to_owned()))
            .await
            .unwrap();
        drop(tx);
        helper.consume_bridge_messages(rx).await;

        let snapshot = helper.snapshot().await;
        let input = snapshot.find_by_dom_id(crate::page::URL_INPUT_ID).unwrap();
        assert!(input.element.has_class(crate::page::INVALID_CLASS));
    }
}
