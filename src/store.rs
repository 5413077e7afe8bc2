//! Catalog persistence.
//!
//! The [`CatalogStore`] trait is the only way the rest of the application
//! reads or writes the catalog document. The stored form is the user's raw
//! YAML text: [`save`](CatalogStore::save) validates it and then persists it
//! byte-for-byte, so comments and formatting survive an edit round-trip.
//!
//! A missing catalog is not an error. It loads as an empty mapping and as
//! empty raw text.

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The document is not well-formed YAML (or cannot be represented as a
    /// JSON-compatible value).
    #[error("{0}")]
    Parse(String),
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse catalog text into a document value.
///
/// Empty or null documents become an empty mapping.
pub fn parse_document(text: &str) -> Result<Value, StoreError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    let value: Value =
        serde_yaml::from_str(text).map_err(|e| StoreError::Parse(e.to_string()))?;
    Ok(match value {
        Value::Null => Value::Object(Default::default()),
        other => other,
    })
}

/// Abstract storage for the catalog document.
///
/// Implementations must be `Send + Sync`; the server shares one store
/// across all request handlers.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load and parse the catalog.
    async fn load(&self) -> Result<Value, StoreError> {
        parse_document(&self.load_raw().await?)
    }

    /// Load the catalog text exactly as stored.
    async fn load_raw(&self) -> Result<String, StoreError>;

    /// Validate `raw` and persist it unchanged.
    ///
    /// A document that does not parse is rejected with
    /// [`StoreError::Parse`] and the stored text is left as it was.
    async fn save(&self, raw: &str) -> Result<(), StoreError>;
}

/// Catalog stored as a YAML file on disk.
pub struct FileCatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "catalog".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn load_raw(&self) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, raw: &str) -> Result<(), StoreError> {
        parse_document(raw)?;

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        // Write-then-rename so readers never observe a half-written file.
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// In-process catalog, for tests and embedding.
pub struct MemoryCatalogStore {
    raw: RwLock<Option<String>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            raw: RwLock::new(None),
        }
    }

    /// A store pre-seeded with `raw`. The text is not validated, so tests can
    /// seed a broken catalog.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }
}

impl Default for MemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn load_raw(&self) -> Result<String, StoreError> {
        let raw = self.raw.read().unwrap_or_else(|e| e.into_inner());
        Ok(raw.clone().unwrap_or_default())
    }

    async fn save(&self, raw: &str) -> Result<(), StoreError> {
        parse_document(raw)?;
        let mut stored = self.raw.write().unwrap_or_else(|e| e.into_inner());
        *stored = Some(raw.to_string());
        Ok(())
    }
}
