use serde::{Deserialize, Serialize};

/// Fixed delays used by the helper's timers, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long an alert present at page-ready stays fully visible.
    pub alert_dismiss_ms: u64,
    /// Delay between fading an alert out and removing it.
    pub alert_fade_ms: u64,
    /// Lifetime of a toast notification.
    pub notification_lifetime_ms: u64,
    /// Delay between a completed download and activating the save trigger.
    pub auto_save_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            alert_fade_ms: 300,
            notification_lifetime_ms: 5000,
            auto_save_delay_ms: 2000,
        }
    }
}

/// Values used to build the initial download page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    /// Written to the body's `data-client-ip` attribute when set.
    pub client_ip: Option<String>,
    /// Flash messages rendered as alerts on the initial page.
    pub startup_alerts: Vec<String>,
}

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Key of the download history in local storage.
    pub storage_key: String,
    /// Maximum number of history entries kept, newest first.
    pub history_limit: usize,
    pub timings: TimingConfig,
    pub page: PageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "whibo_downloads".to_owned(),
            history_limit: 50,
            timings: TimingConfig::default(),
            page: PageConfig::default(),
        }
    }
}
