//! Backing store and session configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::UserId;

/// Where the in-memory store gets its initial documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// JSON seed file; the store starts empty when unset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

/// Who the CLI acts as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Signed-in user; anonymous when unset.
    #[serde(default)]
    pub user_id: Option<UserId>,
}
