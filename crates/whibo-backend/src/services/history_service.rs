use chrono::Utc;
use whibo_bridge::{MessageFromBackend, history::DownloadRecord};

/// Records a completed download and persists the trimmed history.
///
/// Storage failures are logged; the in-memory list keeps the record either
/// way.
pub async fn track_download(
    context: &crate::app::AppContext,
    filename: String,
    download_id: String,
    quality: String,
) {
    let record = DownloadRecord::completed(filename, download_id, quality, Utc::now());
    let mut state = context.state.write().await;
    if let Err(error) = state.history.track(record).await {
        log::error!("Failed to persist download history: {error}");
    }
}

/// Reads the persisted history, newest first.
pub async fn get_history(context: &crate::app::AppContext) -> Vec<DownloadRecord> {
    let records = context.state.read().await.history.read_persisted().await;
    log::debug!("Download history ({} entries): {records:?}", records.len());
    records
}

/// Handles an incoming history request (see
/// [`whibo_bridge::MessageToBackend::HistoryRequest`]).
pub async fn handle_history_request(context: &crate::app::AppContext) {
    let records = get_history(context).await;
    context
        .send(MessageFromBackend::HistoryResponse(records))
        .await;
}
