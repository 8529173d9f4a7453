use std::path::Path;

use async_trait::async_trait;

use crate::domain::WhisperModel;

pub struct InferenceRequest<'a> {
    pub audio: &'a Path,
    /// Prefix the engine appends `.txt` and `.json` to.
    pub output_base: &'a Path,
    pub model: WhisperModel,
}

/// Receives raw percentages as the engine reports them. Implementations must not block.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8);
}

#[async_trait]
pub trait InferenceEngine: Send + Sync {
    async fn run(
        &self,
        request: InferenceRequest<'_>,
        progress: &dyn ProgressSink,
    ) -> Result<(), InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("engine unavailable: {0}")]
    Unavailable(String),
    #[error("engine exited with {exit_code:?}: {stderr_tail}")]
    Failed {
        exit_code: Option<i32>,
        stderr_tail: String,
    },
}
