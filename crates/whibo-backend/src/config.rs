use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};
use whibo_bridge::config::Config;

/// Errors that can occur while loading or resolving application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration or data directories. This
    /// usually occurs when required environment variables are missing (e.g.,
    /// `$HOME` on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the configuration to TOML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Returns the configuration and data directories.
fn build_project_dirs() -> Result<(PathBuf, PathBuf), ConfigError> {
    match ProjectDirs::from("dev", "whibo", "whibo") {
        Some(path) => Ok((path.config_dir().to_path_buf(), path.data_dir().to_path_buf())),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk. Returns the loaded config,
/// as well as the path to the data directory that holds local storage.
pub async fn load_config() -> Result<(Config, PathBuf), ConfigError> {
    let (config_dir, data_dir) = build_project_dirs()?;
    let config = load_config_from(&config_dir.join("config.toml")).await?;
    Ok((config, data_dir))
}

/// Reads `config_path`, writing the defaults there first if it does not exist.
pub async fn load_config_from(config_path: &Path) -> Result<Config, ConfigError> {
    log::info!("Loading configuration from {config_path:?}");
    if config_path.exists() {
        let contents = read_to_string(config_path).await?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}
