//! Artifact store port - Interface for request-scoped temporary audio files

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::ArtifactName;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the shared temporary directory holding audio artifacts
///
/// Artifact names are unique per request, so implementations need no locking.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtifactStorePort: Send + Sync {
    /// Write `data` under `name` and return the full path
    async fn persist(&self, name: &ArtifactName, data: &[u8]) -> Result<PathBuf, ApplicationError>;

    /// Read an artifact back
    async fn read(&self, path: &Path) -> Result<Vec<u8>, ApplicationError>;

    /// Remove an artifact; removing a missing file is not an error
    async fn remove(&self, path: &Path) -> Result<(), ApplicationError>;
}
