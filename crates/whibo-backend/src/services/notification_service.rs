use std::time::Duration;

use whibo_bridge::notification::{NotificationMessage, NotificationRecord};
use whibo_page::{Element, ElementId, Style};

use crate::page::ALERT_CLASS;

/// Puts a toast on the page and schedules its removal.
///
/// Every call creates its own element with its own timer; toasts never
/// replace or merge with each other.
pub async fn show_notification(
    context: super::AppContextHandle,
    notification: NotificationMessage,
) -> ElementId {
    let record = NotificationRecord::from(notification);
    let (toast, lifetime, snapshot) = {
        let mut state = context.state.write().await;
        let toast = state.document.append_to_body(toast_element(&record));
        let content = vec![
            Element::new("i").with_classes(&format!(
                "fas {}",
                record.notification_type.icon_class()
            )),
            Element::new("button")
                .with_classes("btn-close")
                .with_attribute("type", "button"),
        ];
        if let Err(error) = state.document.replace_children(toast, content) {
            log::error!("Failed to fill notification {toast:?}: {error}");
        }

        let lifetime = Duration::from_millis(state.config.timings.notification_lifetime_ms);
        (toast, lifetime, state.document.snapshot())
    };

    log::debug!(
        "Showing {} notification {toast:?}: {}",
        record.notification_type.as_str(),
        record.message
    );
    context.publish(snapshot).await;

    tokio::spawn(async move {
        tokio::time::sleep(lifetime).await;
        let snapshot = {
            let mut state = context.state.write().await;
            // already closed by hand
            if !state.document.remove(toast) {
                return;
            }
            state.document.snapshot()
        };
        context.publish(snapshot).await;
    });

    toast
}

/// Handles a manual close of a toast or alert. Unknown or already removed
/// elements are ignored.
pub async fn dismiss_notification(context: &crate::app::AppContext, id: ElementId) {
    let snapshot = {
        let mut state = context.state.write().await;
        let is_alert = state
            .document
            .get(id)
            .is_some_and(|element| element.has_class(ALERT_CLASS));
        if !is_alert || !state.document.remove(id) {
            return;
        }
        state.document.snapshot()
    };
    context.publish(snapshot).await;
}

fn toast_element(record: &NotificationRecord) -> Element {
    Element::new("div")
        .with_classes(&format!(
            "alert alert-{} position-fixed top-0 end-0 m-3",
            record.notification_type.as_str()
        ))
        .with_attribute("role", "alert")
        .with_attribute("data-created-at", record.created_at.to_rfc3339())
        .with_style(Style {
            z_index: Some(9999),
            min_width: Some(300.0),
            ..Default::default()
        })
        .with_text(record.message.clone())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use whibo_bridge::notification::NotificationType;

    use crate::test_support::helper_with_config;

    #[tokio::test(start_paused = true)]
    async fn toast_is_built_and_removed_after_its_lifetime() {
        let (helper, _rx, _) = helper_with_config(Default::default()).await;
        let toast = helper
            .show_notification("Saved", NotificationType::Success)
            .await;

        helper
            .with_document(|d| {
                let element = d.get(toast).unwrap();
                assert_eq!(
                    element.classes,
                    vec!["alert", "alert-success", "position-fixed", "top-0", "end-0", "m-3"]
                );
                assert_eq!(element.text, "Saved");
                assert_eq!(element.style.z_index, Some(9999));

                let children = d.children(toast);
                assert_eq!(children.len(), 2);
                assert!(d.get(children[0]).unwrap().has_class("fa-check-circle"));
                assert!(d.get(children[1]).unwrap().has_class("btn-close"));
            })
            .await;

        tokio::time::sleep(Duration::from_millis(4990)).await;
        assert!(helper.with_document(|d| d.contains(toast)).await);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!helper.with_document(|d| d.contains(toast)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_toasts_expire_independently() {
        let (helper, _rx, _) = helper_with_config(Default::default()).await;

        let first = helper.show_notification("one", NotificationType::Info).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let second = helper.show_notification("two", NotificationType::Danger).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let third = helper.show_notification("three", NotificationType::Warning).await;

        let toasts = helper
            .with_document(|d| d.elements_by_class("position-fixed"))
            .await;
        assert_eq!(toasts, vec![first, second, third]);

        // close the middle one by hand; the others keep their own timers
        helper.dismiss_notification(second).await;

        tokio::time::sleep(Duration::from_millis(3010)).await;
        helper
            .with_document(|d| {
                assert!(!d.contains(first));
                assert!(!d.contains(second));
                assert!(d.contains(third));
            })
            .await;

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(!helper.with_document(|d| d.contains(third)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn non_success_toasts_use_info_icon() {
        let (helper, _rx, _) = helper_with_config(Default::default()).await;
        let toast = helper
            .show_notification("Link expired", NotificationType::Danger)
            .await;

        helper
            .with_document(|d| {
                let icon = d.children(toast)[0];
                assert!(d.get(icon).unwrap().has_class("fa-info-circle"));
                assert!(d.get(toast).unwrap().has_class("alert-danger"));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_twice_is_harmless() {
        let (helper, _rx, _) = helper_with_config(Default::default()).await;
        let toast = helper.show_notification("bye", NotificationType::Info).await;

        helper.dismiss_notification(toast).await;
        helper.dismiss_notification(toast).await;
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert!(!helper.with_document(|d| d.contains(toast)).await);
    }
}
