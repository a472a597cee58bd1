use whibo_page::Element;

use crate::page::{PROGRESS_BAR_ID, PROGRESS_PERCENTAGE_ID, PROGRESS_TEXT_ID};

/// Number of trailing identifier characters shown under the status text.
const SHORT_ID_LEN: usize = 8;

/// Pushes a progress value into the bar, the percentage label and the status
/// text. Missing targets are skipped.
///
/// Finite percentages are clamped into `0..=100`; NaN and infinities are
/// rejected without touching the page.
pub async fn update_progress(
    context: &crate::app::AppContext,
    percentage: f64,
    status_text: &str,
    download_id: &str,
) {
    if !percentage.is_finite() {
        log::warn!("Ignoring non-finite progress value {percentage} for {download_id}");
        return;
    }
    // `+ 0.0` turns -0.0 into 0.0
    let percentage = percentage.clamp(0.0, 100.0) + 0.0;

    let snapshot = {
        let mut state = context.state.write().await;
        let document = &mut state.document;
        let mut changed = false;

        if let Some(bar) = document.element_by_id_mut(PROGRESS_BAR_ID) {
            bar.style.width_percent = Some(percentage);
            changed = true;
        }

        if let Some(label) = document.element_by_id_mut(PROGRESS_PERCENTAGE_ID) {
            label.text = format!("{percentage}%");
            changed = true;
        }

        if let Some(status) = document.element_by_id(PROGRESS_TEXT_ID) {
            if let Some(element) = document.get_mut(status) {
                element.text.clear();
            }
            let details = vec![
                Element::new("i").with_classes("fas fa-download"),
                Element::new("span").with_text(status_text),
                Element::new("small")
                    .with_classes("d-block text-muted")
                    .with_text(format!("Download ID: {}", short_id(download_id))),
            ];
            if let Err(error) = document.replace_children(status, details) {
                log::error!("Failed to update progress details: {error}");
            }
            changed = true;
        }

        if !changed {
            return;
        }
        document.snapshot()
    };

    context.publish(snapshot).await;
}

/// Last [`SHORT_ID_LEN`] characters of `download_id`, or all of it when
/// shorter.
fn short_id(download_id: &str) -> String {
    let skip = download_id.chars().count().saturating_sub(SHORT_ID_LEN);
    download_id.chars().skip(skip).collect()
}
