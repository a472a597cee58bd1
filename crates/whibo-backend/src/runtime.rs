//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, local storage, the page and
//! the message dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use tokio::sync::mpsc::{Receiver, Sender};
use whibo_bridge::{MessageFromBackend, MessageToBackend, config::Config};

use crate::{helper::ClientUiHelper, state::State, storage::FileStorage};

/// File inside the data directory that backs local storage.
const LOCAL_STORAGE_FILE: &str = "local_storage.json";

/// Initialize the helper and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let (config, data_dir) = match crate::config::load_config().await {
        Ok(loaded) => loaded,
        Err(error) => {
            log::error!("Failed to load config, using defaults: {error}");
            (Config::default(), std::env::temp_dir().join("whibo"))
        }
    };

    let storage_path = data_dir.join(LOCAL_STORAGE_FILE);
    log::info!("Using local storage at {storage_path:?}");
    let storage = Arc::new(FileStorage::new(storage_path));

    let state = match State::new(config, storage).await {
        Ok(state) => state,
        Err(error) => {
            log::error!("Failed to build the download page: {error}");
            return;
        }
    };
    let helper = ClientUiHelper::new(state, tx);
    helper.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
///
/// The helper runs on its own thread with a single-threaded runtime, so
/// callbacks and timers never run in parallel.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(error) => {
                log::error!("Failed to build the backend runtime: {error}");
                return;
            }
        };
        runtime.block_on(setup_backend(rx, tx));
    });
}
