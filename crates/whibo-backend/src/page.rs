//! Layout of the download page and the element ids the helper relies on.

use whibo_bridge::config::PageConfig;
use whibo_page::{Document, Element, PageError, Style};

pub const URL_INPUT_ID: &str = "url";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const PROGRESS_TEXT_ID: &str = "progress-text";
pub const PROGRESS_PERCENTAGE_ID: &str = "progress-percentage";
pub const DOWNLOAD_TRIGGER_ID: &str = "download-file-btn";

pub const ALERT_CLASS: &str = "alert";
pub const INVALID_CLASS: &str = "is-invalid";
pub const CLIENT_IP_ATTRIBUTE: &str = "data-client-ip";

/// Builds the page the frontend shows at startup: flash alerts, the URL
/// field, the progress block and the download trigger.
pub fn build_download_page(config: &PageConfig) -> Result<Document, PageError> {
    let mut document = Document::new();
    let body = document.body();

    if let Some(client_ip) = &config.client_ip {
        if let Some(element) = document.get_mut(body) {
            element
                .attributes
                .insert(CLIENT_IP_ATTRIBUTE.to_owned(), client_ip.clone());
        }
    }

    for message in &config.startup_alerts {
        document.append_to_body(
            Element::new("div")
                .with_classes("alert alert-info alert-dismissible")
                .with_attribute("role", "alert")
                .with_text(message.clone()),
        );
    }

    document.append_to_body(
        Element::new("input")
            .with_id(URL_INPUT_ID)
            .with_classes("form-control")
            .with_attribute("type", "url")
            .with_attribute("placeholder", "https://www.youtube.com/watch?v=..."),
    );

    let progress = document.append_to_body(Element::new("div").with_classes("progress"));
    document.append_child(
        progress,
        Element::new("div")
            .with_id(PROGRESS_BAR_ID)
            .with_classes("progress-bar")
            .with_style(Style {
                width_percent: Some(0.0),
                ..Default::default()
            }),
    )?;
    document.append_child(
        progress,
        Element::new("span")
            .with_id(PROGRESS_PERCENTAGE_ID)
            .with_text("0%"),
    )?;
    document.append_to_body(
        Element::new("div")
            .with_id(PROGRESS_TEXT_ID)
            .with_text("Waiting for a download"),
    );

    document.append_to_body(
        Element::new("a")
            .with_id(DOWNLOAD_TRIGGER_ID)
            .with_classes("btn btn-success")
            .with_text("Save file"),
    );

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_every_target() {
        let config = PageConfig {
            client_ip: Some("203.0.113.7".to_owned()),
            startup_alerts: vec!["Welcome back".to_owned(), "Links expire in 10 minutes".to_owned()],
        };
        let document = build_download_page(&config).unwrap();

        for id in [
            URL_INPUT_ID,
            PROGRESS_BAR_ID,
            PROGRESS_TEXT_ID,
            PROGRESS_PERCENTAGE_ID,
            DOWNLOAD_TRIGGER_ID,
        ] {
            assert!(document.element_by_id(id).is_some(), "missing #{id}");
        }
        assert_eq!(document.elements_by_class(ALERT_CLASS).len(), 2);

        let body = document.get(document.body()).unwrap();
        assert_eq!(body.attribute(CLIENT_IP_ATTRIBUTE), Some("203.0.113.7"));
    }

    #[test]
    fn progress_parts_sit_inside_the_progress_block() {
        let document = build_download_page(&PageConfig::default()).unwrap();
        let progress = document.elements_by_class("progress")[0];

        for id in [PROGRESS_BAR_ID, PROGRESS_PERCENTAGE_ID] {
            let part = document.element_by_id(id).unwrap();
            assert_eq!(document.parent(part), Some(progress));
        }
        assert_eq!(document.children(progress).len(), 2);
    }

    #[test]
    fn default_page_has_no_alerts() {
        let document = build_download_page(&PageConfig::default()).unwrap();
        assert!(document.elements_by_class(ALERT_CLASS).is_empty());
        let body = document.get(document.body()).unwrap();
        assert_eq!(body.attribute(CLIENT_IP_ATTRIBUTE), None);
    }
}
