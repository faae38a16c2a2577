use crate::models::{Days, Theme};
use std::{env, io::ErrorKind, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Storage entry holding the JSON-serialized store (date -> forest).
pub const STORE_KEY: &str = "tasks";
/// Storage entry holding the raw theme preference string.
pub const THEME_KEY: &str = "theme";

/// Key-value persistence over a local data directory, one file per key.
/// Writes are best effort: a failed write leaves the in-memory state
/// authoritative for the rest of the session.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read storage entry '{key}': {err}");
                None
            }
        }
    }

    pub async fn set(&self, key: &str, value: &str) {
        if let Err(err) = fs::write(self.key_path(key), value).await {
            error!("failed to write storage entry '{key}': {err}");
        }
    }

    pub async fn remove(&self, key: &str) {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => error!("failed to remove storage entry '{key}': {err}"),
        }
    }
}

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Load the task store; a missing or malformed entry yields an empty store.
pub async fn load_days(storage: &Storage) -> Days {
    match storage.get(STORE_KEY).await {
        Some(payload) => match serde_json::from_str(&payload) {
            Ok(days) => days,
            Err(err) => {
                error!("failed to parse stored tasks, starting empty: {err}");
                Days::new()
            }
        },
        None => Days::new(),
    }
}

/// Load the theme preference; anything but `dark`/`light` falls back to the
/// default.
pub async fn load_theme(storage: &Storage) -> Theme {
    match storage.get(THEME_KEY).await {
        Some(value) => Theme::parse(value.trim()).unwrap_or_else(|| {
            error!("unrecognized stored theme {value:?}, using default");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

pub async fn persist_days(storage: &Storage, days: &Days) {
    match serde_json::to_string_pretty(days) {
        Ok(payload) => storage.set(STORE_KEY, &payload).await,
        Err(err) => error!("failed to serialize tasks: {err}"),
    }
}

pub async fn persist_theme(storage: &Storage, theme: Theme) {
    storage.set(THEME_KEY, theme.as_str()).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskNode;

    fn temp_storage(tag: &str) -> Storage {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("daily_tasks_{tag}_{}_{nanos}", std::process::id()));
        Storage::new(dir)
    }

    #[tokio::test]
    async fn missing_entries_load_as_defaults() {
        let storage = temp_storage("missing");
        storage.ensure_dir().await.unwrap();
        assert!(load_days(&storage).await.is_empty());
        assert_eq!(load_theme(&storage).await, Theme::default());
    }

    #[tokio::test]
    async fn malformed_store_falls_back_to_empty() {
        let storage = temp_storage("malformed");
        storage.ensure_dir().await.unwrap();
        storage.set(STORE_KEY, "{not json").await;
        storage.set(THEME_KEY, "neon").await;
        assert!(load_days(&storage).await.is_empty());
        assert_eq!(load_theme(&storage).await, Theme::default());
    }

    #[tokio::test]
    async fn persisted_store_round_trips() {
        let storage = temp_storage("roundtrip");
        storage.ensure_dir().await.unwrap();

        let mut days = Days::new();
        days.insert("2026-01-05".to_string(), vec![TaskNode::new("write letter")]);
        persist_days(&storage, &days).await;
        persist_theme(&storage, Theme::Dark).await;

        assert_eq!(load_days(&storage).await, days);
        assert_eq!(load_theme(&storage).await, Theme::Dark);

        storage.remove(STORE_KEY).await;
        assert!(load_days(&storage).await.is_empty());
    }
}
