use std::time::Duration;

use whibo_page::ElementId;

use crate::page::{ALERT_CLASS, CLIENT_IP_ATTRIBUTE};

/// Handles [`whibo_bridge::MessageToBackend::PageReady`]: logs the client IP
/// and schedules every alert currently on the page for dismissal.
///
/// The scan happens once; alerts added afterwards are left alone.
pub async fn handle_page_ready(context: super::AppContextHandle) {
    let (alerts, client_ip, timings, snapshot) = {
        let state = context.state.read().await;
        let document = &state.document;
        let client_ip = document
            .get(document.body())
            .and_then(|body| body.attribute(CLIENT_IP_ATTRIBUTE))
            .map(str::to_owned);
        (
            document.elements_by_class(ALERT_CLASS),
            client_ip,
            state.config.timings.clone(),
            document.snapshot(),
        )
    };

    if let Some(client_ip) = client_ip {
        log::info!("WhiBO client IP: {client_ip}");
    }
    log::info!("Page ready, {} alert(s) scheduled for dismissal", alerts.len());

    let visible_for = Duration::from_millis(timings.alert_dismiss_ms);
    let fade_for = Duration::from_millis(timings.alert_fade_ms);
    for alert in alerts {
        tokio::spawn(dismiss_alert(context.clone(), alert, visible_for, fade_for));
    }

    context.publish(snapshot).await;
}

/// Fades `alert` out after `visible_for`, then removes it after `fade_for`.
async fn dismiss_alert(
    context: super::AppContextHandle,
    alert: ElementId,
    visible_for: Duration,
    fade_for: Duration,
) {
    tokio::time::sleep(visible_for).await;
    let snapshot = {
        let mut state = context.state.write().await;
        let Some(element) = state.document.get_mut(alert) else {
            return;
        };
        element.style.opacity = Some(0.0);
        state.document.snapshot()
    };
    context.publish(snapshot).await;

    tokio::time::sleep(fade_for).await;
    let snapshot = {
        let mut state = context.state.write().await;
        if !state.document.remove(alert) {
            return;
        }
        state.document.snapshot()
    };
    context.publish(snapshot).await;
}
