use std::sync::Arc;

use gpui::{AppContext, Entity};
use whibo_page::{DocumentSnapshot, SnapshotNode};

/// Class carried by every toast; flash alerts lack it.
const TOAST_CLASS: &str = "position-fixed";

#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub download_id: String,
    pub href: Option<String>,
}

/// Frontend mirror of the backend page.
#[derive(Debug, Clone, Default)]
pub struct PageEntity {
    pub snapshot: Option<Arc<DocumentSnapshot>>,
    /// `None` until the first URL has been checked.
    pub url_valid: Option<bool>,
    pub last_save: Option<SaveRequest>,
}

impl PageEntity {
    pub fn update_snapshot<C: AppContext>(
        entity: &Entity<Self>,
        snapshot: Arc<DocumentSnapshot>,
        cx: &mut C,
    ) {
        let _ = entity.update(cx, |this, cx| {
            this.snapshot = Some(snapshot);
            cx.notify();
        });
    }

    /// Toasts currently on the page, oldest first.
    pub fn toasts(&self) -> Vec<SnapshotNode> {
        self.snapshot
            .as_ref()
            .map(|snapshot| {
                snapshot
                    .find_by_class(TOAST_CLASS)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Top-level page content without the toast overlay.
    pub fn content(&self) -> Vec<SnapshotNode> {
        self.snapshot
            .as_ref()
            .map(|snapshot| {
                snapshot
                    .root
                    .children
                    .iter()
                    .filter(|node| !node.element.has_class(TOAST_CLASS))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use whibo_page::{Document, Element};

    use super::*;

    #[test]
    fn toasts_are_split_from_page_content() {
        let mut document = Document::new();
        document.append_to_body(Element::new("div").with_classes("alert alert-info"));
        document.append_to_body(Element::new("input").with_id("url"));
        let toast = document.append_to_body(
            Element::new("div")
                .with_classes("alert alert-success position-fixed top-0 end-0 m-3")
                .with_text("ready"),
        );

        let page = PageEntity {
            snapshot: Some(Arc::new(document.snapshot())),
            ..Default::default()
        };

        let toasts = page.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, toast);

        let content = page.content();
        assert_eq!(content.len(), 2);
        assert!(content.iter().all(|node| node.id != toast));
    }

    #[test]
    fn empty_page_has_nothing_to_draw() {
        let page = PageEntity::default();
        assert!(page.toasts().is_empty());
        assert!(page.content().is_empty());
    }
}
