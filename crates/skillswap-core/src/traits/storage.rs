//! Storage provider trait for pluggable object storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type (if known).
    pub mime_type: Option<String>,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// Trait for object storage backends.
///
/// Paths are `/`-separated and relative to the provider root. The
/// [`StorageProvider`] trait is defined here in `skillswap-core` and
/// implemented in `skillswap-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read an object into memory.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to the given path, replacing any existing object.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete the object at the given path. Missing objects are not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether an object exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Get metadata about an object.
    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta>;
}
