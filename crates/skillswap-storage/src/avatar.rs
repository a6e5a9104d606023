//! Avatar bucket.
//!
//! Objects are stored at `<user_id>/avatar.<ext>` and served publicly under
//! the configured base URL. Write permission on a path is decided by the
//! caller before [`AvatarStore::put`] is invoked.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use skillswap_core::config::storage::StorageConfig;
use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;
use skillswap_core::traits::storage::StorageProvider;

/// Accepted avatar image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarFormat {
    /// `image/png`
    Png,
    /// `image/jpeg`
    Jpeg,
    /// `image/gif`
    Gif,
    /// `image/webp`
    Webp,
}

impl AvatarFormat {
    /// Every accepted format.
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpeg, Self::Gif, Self::Webp];

    /// Map a `Content-Type` header value to a format.
    pub fn from_content_type(content_type: &str) -> AppResult<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Ok(Self::Png),
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/gif" => Ok(Self::Gif),
            "image/webp" => Ok(Self::Webp),
            _ => Err(AppError::validation(format!(
                "Unsupported avatar type '{content_type}'. Expected png, jpeg, gif or webp"
            ))),
        }
    }

    /// File extension used in the object path.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// MIME type served back to clients.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// Public avatar bucket backed by a [`StorageProvider`].
#[derive(Debug, Clone)]
pub struct AvatarStore {
    provider: Arc<dyn StorageProvider>,
    public_base_url: String,
    max_bytes: usize,
}

impl AvatarStore {
    /// Create a bucket over `provider` using the storage configuration.
    pub fn new(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            provider,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            max_bytes: config.max_avatar_bytes,
        }
    }

    /// Object path of a user's avatar.
    pub fn object_path(user_id: Uuid, format: AvatarFormat) -> String {
        format!("{user_id}/avatar.{}", format.extension())
    }

    /// Public URL of an object.
    pub fn public_url(&self, object_path: &str) -> String {
        format!("{}/{}", self.public_base_url, object_path.trim_start_matches('/'))
    }

    /// Maximum accepted upload size in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Store an avatar, replacing any previous object at the same path.
    ///
    /// Returns the public URL of the stored object.
    pub async fn put(&self, object_path: &str, data: Bytes) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("Avatar upload is empty"));
        }
        if data.len() > self.max_bytes {
            return Err(AppError::validation(format!(
                "Avatar exceeds the {} byte limit",
                self.max_bytes
            )));
        }
        let size = data.len();
        self.provider.write(object_path, data).await?;
        info!(path = %object_path, bytes = size, "Avatar stored");
        Ok(self.public_url(object_path))
    }

    /// Delete the user's avatar objects stored under any format but `keep`.
    pub async fn remove_other_formats(&self, user_id: Uuid, keep: AvatarFormat) -> AppResult<()> {
        for format in AvatarFormat::ALL.into_iter().filter(|f| *f != keep) {
            let path = Self::object_path(user_id, format);
            self.provider.delete(&path).await?;
        }
        Ok(())
    }

    /// Read an avatar and its MIME type.
    pub async fn get(&self, object_path: &str) -> AppResult<(Bytes, String)> {
        let meta = self.provider.metadata(object_path).await?;
        let data = self.provider.read_bytes(object_path).await?;
        let mime = meta
            .mime_type
            .unwrap_or_else(|| "application/octet-stream".to_string());
        Ok((data, mime))
    }

    /// Check the backing provider.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Name of the backing provider.
    pub fn provider_type(&self) -> &str {
        self.provider.provider_type()
    }
}
