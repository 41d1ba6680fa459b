pub mod file;
pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::AppError;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Stable key names. Existing stored data depends on them.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const LANGUAGE: &str = "language";
    pub const USER: &str = "user";
    pub const VISITED: &str = "visited";
    pub const CONTENT: &str = "appData";
}

/// Raw string key-value backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Typed JSON view over a [`KeyValueStore`].
///
/// Reads never fail: an absent or unreadable entry yields the caller's
/// default. Writes never fail either; errors are logged and the caller's
/// in-memory state stays authoritative.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored value for {}, using default", key);
                return default;
            }
            Err(e) => {
                warn!("failed to read {}: {}", key, e);
                return default;
            }
        };

        match parse_stored(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("discarding unreadable value for {}: {}", key, e);
                default
            }
        }
    }

    pub async fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw).await
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value).await {
            error!("failed to persist {}: {}", key, e);
        }
    }

    pub async fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove(key).await {
            error!("failed to remove {}: {}", key, e);
        }
    }
}

/// Parse a stored JSON value. Older clients wrote some enum-like values as
/// bare text (`light` instead of `"light"`), so a failed parse is retried as
/// a JSON string before giving up.
fn parse_stored<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
        .or_else(|err| serde_json::from_value(Value::String(raw.to_string())).map_err(|_| err))
}
