use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Status of a tracked download. Records are only created once a download
/// has finished, so `Completed` is the only state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    #[default]
    Completed,
}

/// One entry of the client-local download history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRecord {
    pub filename: String,
    pub download_id: String,
    pub quality: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub status: DownloadStatus,
}

impl DownloadRecord {
    /// Builds a completed record stamped with `at`.
    pub fn completed(
        filename: impl Into<String>,
        download_id: impl Into<String>,
        quality: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            filename: filename.into(),
            download_id: download_id.into(),
            quality: quality.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: DownloadStatus::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 20, 30).unwrap();
        let record = DownloadRecord::completed("clip.mp4", "abc123", "720p", at);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filename": "clip.mp4",
                "downloadId": "abc123",
                "quality": "720p",
                "timestamp": "2025-03-01T10:20:30.000Z",
                "status": "completed",
            })
        );
    }
}
