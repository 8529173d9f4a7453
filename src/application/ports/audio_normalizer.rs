use std::path::Path;

use async_trait::async_trait;

/// Converts arbitrary input audio into 16 kHz mono 16-bit PCM WAV.
#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("converter `{program}` could not be started: {reason}")]
    Unavailable { program: String, reason: String },
    #[error("converter exited with {exit_code:?}: {stderr}")]
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },
}
