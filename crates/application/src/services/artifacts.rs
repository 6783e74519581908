//! Release of request-scoped temporary files

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::ports::ArtifactStorePort;

/// Remove every artifact a request created
///
/// Removal failures are logged and never change the request outcome.
pub(crate) async fn release_artifacts(store: &dyn ArtifactStorePort, paths: &[PathBuf]) {
    for path in paths {
        match store.remove(path).await {
            Ok(()) => debug!(path = %path.display(), "Removed temporary artifact"),
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "Failed to remove temporary artifact"
            ),
        }
    }
}
