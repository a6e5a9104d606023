//! Avatar storage configuration.

use serde::{Deserialize, Serialize};

/// Object storage configuration for the avatar bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the avatar bucket on local disk.
    #[serde(default = "default_avatar_root")]
    pub avatar_root: String,
    /// Base URL under which avatars are served publicly.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum avatar upload size in bytes.
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            avatar_root: default_avatar_root(),
            public_base_url: default_public_base_url(),
            max_avatar_bytes: default_max_avatar_bytes(),
        }
    }
}

fn default_avatar_root() -> String {
    "./data/avatars".to_string()
}

fn default_public_base_url() -> String {
    "/avatars".to_string()
}

fn default_max_avatar_bytes() -> usize {
    2 * 1024 * 1024
}
