use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum PathdumpError {
    #[error("Configuration file '{}' not found", .0.display())]
    ConfigNotFound(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl PathdumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PathdumpError::Io {
            path: path.into(),
            source,
        }
    }
}
