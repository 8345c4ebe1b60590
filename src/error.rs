use std::path::PathBuf;
use thiserror::Error;

/// Every failure a pipeline stage can report to its caller.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("artifact not found: {}", path.display())]
    MissingArtifact { path: PathBuf },

    #[error("artifact {} could not be read: {reason}", path.display())]
    CorruptArtifact { path: PathBuf, reason: String },

    #[error("image could not be decoded: {0}")]
    UnreadableImage(String),

    #[error("inference failed: {0}")]
    InferenceError(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClassifierError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::CorruptArtifact {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
