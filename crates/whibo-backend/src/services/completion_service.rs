use std::time::Duration;

use whibo_bridge::{MessageFromBackend, notification::NotificationMessage};

use crate::Notifier;
use crate::page::DOWNLOAD_TRIGGER_ID;

/// Announces a finished download and, after the auto-save delay, activates
/// the page's download trigger.
///
/// When the trigger is missing at that point nothing is saved and no second
/// notification is shown.
pub async fn on_download_complete<N: Notifier>(
    context: super::AppContextHandle,
    notifier: N,
    download_id: String,
    filename: String,
) {
    notifier
        .notify(NotificationMessage::success(format!(
            "✅ {filename} ready for download!"
        )))
        .await;

    let delay = {
        let state = context.state.read().await;
        Duration::from_millis(state.config.timings.auto_save_delay_ms)
    };

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let trigger = {
            let state = context.state.read().await;
            let document = &state.document;
            document.element_by_id(DOWNLOAD_TRIGGER_ID).map(|id| {
                document
                    .get(id)
                    .and_then(|element| element.attribute("href"))
                    .map(str::to_owned)
            })
        };
        let Some(href) = trigger else {
            log::debug!("No #{DOWNLOAD_TRIGGER_ID} on the page, skipping auto-save of {download_id}");
            return;
        };

        log::info!("Starting save of {download_id}");
        context
            .send(MessageFromBackend::SaveRequested { download_id, href })
            .await;
        notifier
            .notify(NotificationMessage::info("📥 Download started to your device"))
            .await;
    });
}

/// Shows a network failure reported by a caller and logs it.
pub async fn on_network_error<N: Notifier>(notifier: &N, error: &str) {
    notifier
        .notify(NotificationMessage::danger(format!(
            "❌ Network error: {error}"
        )))
        .await;
    log::error!("WhiBO network error: {error}");
}
