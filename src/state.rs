use crate::config::Config;
use markbook_client::{Credentials, RecordFetcher};
use std::sync::Arc;

/// Shared application state accessible to all handlers.
///
/// Everything here is immutable after startup; requests share it without
/// locks and carry no per-request state of their own.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client for the records backend.
    pub fetcher: Arc<RecordFetcher>,

    /// The single credential variant selected by configuration.
    pub credentials: Arc<Credentials>,

    /// Configuration.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(fetcher: RecordFetcher, credentials: Credentials, config: Config) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            credentials: Arc::new(credentials),
            config: Arc::new(config),
        }
    }
}
