//! Unique names for request-scoped temporary files

use std::fmt;

use uuid::Uuid;

use super::UploadName;

/// Name of a temporary audio artifact: `{random_token}_{name}`
///
/// The random token keeps concurrent requests from colliding in the
/// shared temporary directory without any locking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Fixed base name of synthesized speech output
    pub const SYNTHESIS_OUTPUT: &'static str = "output.mp3";

    /// Create a unique name for an uploaded file
    pub fn for_upload(upload: &UploadName) -> Self {
        Self::with_token(Uuid::new_v4(), upload.as_str())
    }

    /// Create a unique name for synthesized speech
    pub fn for_synthesis() -> Self {
        Self::with_token(Uuid::new_v4(), Self::SYNTHESIS_OUTPUT)
    }

    /// Create a name from an explicit token
    pub fn with_token(token: Uuid, name: &str) -> Self {
        Self(format!("{}_{name}", token.simple()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtifactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
