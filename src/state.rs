use crate::models::AppData;
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle on the single in-memory store. One logical writer: every
/// mutation locks, transforms the forest, persists, and unlocks before the
/// next request is served.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(storage: Storage, data: AppData) -> Self {
        Self {
            storage,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
