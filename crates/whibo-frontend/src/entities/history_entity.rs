use gpui::{AppContext, Entity};
use whibo_bridge::history::DownloadRecord;

/// Last history list received from the backend, newest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryEntity {
    pub records: Vec<DownloadRecord>,
}

impl HistoryEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, records: Vec<DownloadRecord>, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.records = records;
            cx.notify();
        });
    }
}
