//! Handlers behind the helper's operations.
//!
//! Each handler works on the shared `AppContext`: it mutates the page or the
//! history under the state lock, then pushes the new snapshot to the frontend.
//! Handlers that schedule delayed work spawn their own timer tasks.

pub mod alert_service;
pub mod completion_service;
pub mod config_service;
pub mod history_service;
pub mod notification_service;
pub mod progress_service;
pub mod validation_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
