use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::Root;
use tokio::sync::mpsc;
use whibo_bridge::{MessageFromBackend, MessageToBackend, notification::NotificationMessage};
use whibo_page::ElementId;

use crate::entities::{
    history_entity::HistoryEntity, page_entity::PageEntity, settings_entity::SettingsEntity,
};

pub mod components;
pub mod entities;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) {
        if let Err(error) = self.to_backend.send(message).await {
            log::warn!("Backend is gone, dropping {:?}", error.0);
        }
    }

    pub async fn request_config(&self) {
        self.send(MessageToBackend::ConfigurationRequest).await;
    }

    pub async fn page_ready(&self) {
        self.send(MessageToBackend::PageReady).await;
    }

    pub async fn url_input(&self, text: String) {
        self.send(MessageToBackend::UrlInput(text)).await;
    }

    pub async fn dismiss_notification(&self, id: ElementId) {
        self.send(MessageToBackend::DismissNotification(id)).await;
    }

    pub async fn request_history(&self) {
        self.send(MessageToBackend::HistoryRequest).await;
    }

    pub async fn show_notification(&self, notification: NotificationMessage) {
        self.send(MessageToBackend::ShowNotification(notification)).await;
    }

    pub async fn update_progress(
        &self,
        percentage: f64,
        status_text: String,
        download_id: String,
    ) {
        self.send(MessageToBackend::UpdateProgress {
            percentage,
            status_text,
            download_id,
        })
        .await;
    }

    pub async fn download_complete(&self, download_id: String, filename: String) {
        self.send(MessageToBackend::DownloadComplete {
            download_id,
            filename,
        })
        .await;
    }

    pub async fn network_error(&self, error: String) {
        self.send(MessageToBackend::NetworkError(error)).await;
    }

    /// Records a finished download and refreshes the history view.
    pub async fn track_download(
        &self,
        filename: String,
        download_id: String,
        quality: String,
    ) {
        self.send(MessageToBackend::TrackDownload {
            filename,
            download_id,
            quality,
        })
        .await;
        self.request_history().await;
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let page = cx.new(|_| PageEntity::default());
        let history = cx.new(|_| HistoryEntity::default());
        let settings = cx.new(|_| SettingsEntity::default());

        let data = entities::DataEntities {
            page,
            history,
            settings,
        };
        let listener_data = data.clone();

        let bridge = BackendBridge { to_backend: tx };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        log::debug!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::ConfigurationResponse(config) => {
                                SettingsEntity::update(&listener_data.settings, config, cx)
                            }
                            MessageFromBackend::PageUpdate(snapshot) => {
                                PageEntity::update_snapshot(&listener_data.page, snapshot, cx)
                            }
                            MessageFromBackend::UrlValidity { valid } => {
                                let _ = listener_data.page.update(cx, |model, cx| {
                                    model.url_valid = Some(valid);
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::SaveRequested { download_id, href } => {
                                log::info!("Saving download {download_id} to the device");
                                let _ = listener_data.page.update(cx, |model, cx| {
                                    model.last_save =
                                        Some(entities::page_entity::SaveRequest {
                                            download_id,
                                            href,
                                        });
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::HistoryResponse(records) => {
                                HistoryEntity::update(&listener_data.history, records, cx)
                            }
                        }
                    }
                })
                .detach();

                cx.spawn(async move |_| {
                    bridge.request_config().await;
                    bridge.page_ready().await;
                    bridge.request_history().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge() -> (BackendBridge, mpsc::Receiver<MessageToBackend>) {
        let (to_backend, rx) = mpsc::channel(16);
        (BackendBridge { to_backend }, rx)
    }

    #[tokio::test]
    async fn download_calls_reach_the_backend() {
        let (bridge, mut rx) = bridge();

        bridge
            .update_progress(12.5, "Downloading".to_owned(), "dl-1".to_owned())
            .await;
        bridge
            .download_complete("dl-1".to_owned(), "clip.mp4".to_owned())
            .await;
        bridge.network_error("timeout".to_owned()).await;
        bridge
            .show_notification(NotificationMessage::info("hello"))
            .await;

        assert!(matches!(
            rx.recv().await,
            Some(MessageToBackend::UpdateProgress { percentage, .. }) if percentage == 12.5
        ));
        assert!(matches!(
            rx.recv().await,
            Some(MessageToBackend::DownloadComplete { filename, .. }) if filename == "clip.mp4"
        ));
        assert!(matches!(
            rx.recv().await,
            Some(MessageToBackend::NetworkError(error)) if error == "timeout"
        ));
        assert!(matches!(
            rx.recv().await,
            Some(MessageToBackend::ShowNotification(notification)) if notification.message == "hello"
        ));
    }

    #[tokio::test]
    async fn tracking_refreshes_history() {
        let (bridge, mut rx) = bridge();
        bridge
            .track_download("a.mp4".to_owned(), "dl-2".to_owned(), "720p".to_owned())
            .await;

        assert!(matches!(
            rx.recv().await,
            Some(MessageToBackend::TrackDownload { download_id, .. }) if download_id == "dl-2"
        ));
        assert!(matches!(rx.recv().await, Some(MessageToBackend::HistoryRequest)));
    }

    #[tokio::test]
    async fn closed_backend_only_drops_the_message() {
        let (bridge, rx) = bridge();
        drop(rx);
        bridge.network_error("offline".to_owned()).await;
    }
}
