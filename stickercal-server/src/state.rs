use std::sync::Arc;

use stickercal_core::EventStore;
use stickercal_core::config::{ServerConfig, StoreKind};
use stickercal_core::kv::{FileStore, KvStore, MemoryStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub events: EventStore,
    token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(kv: Arc<dyn KvStore>, token: Option<String>) -> Self {
        AppState {
            events: EventStore::new(kv),
            token: token.map(Arc::from),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let kv: Arc<dyn KvStore> = match config.store {
            StoreKind::Memory => Arc::new(MemoryStore::new()),
            StoreKind::File => Arc::new(FileStore::new(config.data_path())),
        };

        Self::new(kv, config.token.clone())
    }

    /// Bearer token every request must carry, if one is configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
