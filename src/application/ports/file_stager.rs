use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait FileStager: Send + Sync {
    /// Fetches `source_url` into `destination`, creating its parent directory first.
    /// Returns the number of bytes written.
    async fn stage(&self, source_url: &str, destination: &Path) -> Result<u64, StagingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("download rejected: {status}")]
    Rejected { status: String },
    #[error("network failure: {0}")]
    Network(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
