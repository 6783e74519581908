//! Local artifact store - Implements ArtifactStorePort on a temporary directory
//!
//! Artifact names already carry a random token, so concurrent requests share
//! the directory without coordination.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::ArtifactStorePort;
use async_trait::async_trait;
use domain::ArtifactName;
use tracing::{debug, instrument};

/// Artifact store backed by a local directory
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    /// Create a store rooted at `root` without touching the filesystem
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store and make sure its directory exists
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Storage` if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let store = Self::new(root);
        tokio::fs::create_dir_all(&store.root).await.map_err(|e| {
            ApplicationError::Storage(format!(
                "Failed to create upload directory {}: {e}",
                store.root.display()
            ))
        })?;
        Ok(store)
    }

    /// Directory holding the artifacts
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArtifactStorePort for LocalArtifactStore {
    #[instrument(skip(self, data), fields(name = %name, size = data.len()))]
    async fn persist(&self, name: &ArtifactName, data: &[u8]) -> Result<PathBuf, ApplicationError> {
        let path = self.root.join(name.as_str());

        tokio::fs::write(&path, data).await.map_err(|e| {
            ApplicationError::Storage(format!("Failed to write {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "Artifact stored");
        Ok(path)
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn read(&self, path: &Path) -> Result<Vec<u8>, ApplicationError> {
        tokio::fs::read(path).await.map_err(|e| {
            ApplicationError::Storage(format!("Failed to read {}: {e}", path.display()))
        })
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn remove(&self, path: &Path) -> Result<(), ApplicationError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                debug!("Artifact removed");
                Ok(())
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::Storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}
