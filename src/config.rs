use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AppError;
use crate::store::{FileStore, KeyValueStore, MemoryStore, PersistentStore, SqliteStore};

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Fixed admin credentials. Compared verbatim; this is a demo boundary,
/// not a security one.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite { database_url: String },
    File { dir: PathBuf },
    Memory,
}

impl StoreBackend {
    pub async fn open(&self) -> Result<PersistentStore, AppError> {
        let backend: Arc<dyn KeyValueStore> = match self {
            StoreBackend::Sqlite { database_url } => Arc::new(SqliteStore::connect(database_url).await?),
            StoreBackend::File { dir } => Arc::new(FileStore::open(dir).await?),
            StoreBackend::Memory => {
                warn!("using in-memory store; content will not survive a restart");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(PersistentStore::new(backend))
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub admin: AdminCredentials,
    pub store: StoreBackend,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());
        let password = match lookup("ADMIN_PASSWORD") {
            Some(password) => password,
            None => {
                warn!("ADMIN_PASSWORD is not set, using the built-in default");
                DEFAULT_ADMIN_PASSWORD.to_string()
            }
        };

        let store = match lookup("STORE_BACKEND").as_deref().unwrap_or("sqlite") {
            "sqlite" => StoreBackend::Sqlite {
                database_url: lookup("DATABASE_URL")
                    .unwrap_or_else(|| "sqlite://course_board.db".to_string()),
            },
            "file" => StoreBackend::File {
                dir: lookup("STORE_DIR")
                    .unwrap_or_else(|| ".course_board".to_string())
                    .into(),
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(AppError::Config(format!(
                    "STORE_BACKEND must be sqlite, file or memory (got {})",
                    other
                )));
            }
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        info!("store backend: {:?}", store);

        Ok(Self {
            admin: AdminCredentials { username, password },
            store,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_opens() {
        let store = StoreBackend::Memory.open().await.expect("open memory store");
        store.set("visited", &true).await;
        assert!(store.get("visited", false).await);
    }

    fn lookup_from(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).expect("default config");

        assert_eq!(config.admin.username, "admin");
        assert_eq!(
            config.store,
            StoreBackend::Sqlite {
                database_url: "sqlite://course_board.db".to_string()
            }
        );
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_file_backend_uses_store_dir() {
        let config = Config::from_lookup(lookup_from(&[
            ("STORE_BACKEND", "file"),
            ("STORE_DIR", "/tmp/board"),
        ]))
        .expect("file config");

        assert_eq!(config.store, StoreBackend::File { dir: "/tmp/board".into() });
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let backend = Config::from_lookup(lookup_from(&[("STORE_BACKEND", "redis")]));
        assert!(matches!(backend, Err(AppError::Config(_))));

        let addr = Config::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-addr")]));
        assert!(matches!(addr, Err(AppError::Config(_))));
    }

    #[test]
    fn test_default_credentials() {
        let creds = AdminCredentials::default();
        assert_eq!(creds.username, "admin");
        assert!(!creds.password.is_empty());
    }
}
