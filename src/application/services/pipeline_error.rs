use std::io;

use crate::application::ports::{InferenceError, NormalizeError, StagingError};

use super::concurrency_limiter::LimiterClosed;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("download failed: {0}")]
    Download(String),
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("conversion failed with exit code {exit_code:?}: {stderr}")]
    Conversion {
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("inference failed with exit code {exit_code:?}: {stderr_tail}")]
    Inference {
        exit_code: Option<i32>,
        stderr_tail: String,
    },
    #[error("integrity check failed: {0}")]
    Integrity(String),
    #[error("settings lookup failed: {0}")]
    SettingsLookup(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("job task interrupted: {0}")]
    Interrupted(String),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Download(_) => "DownloadError",
            PipelineError::EngineUnavailable(_) => "EngineUnavailable",
            PipelineError::Conversion { .. } => "ConversionError",
            PipelineError::Inference { .. } => "InferenceError",
            PipelineError::Integrity(_) => "IntegrityError",
            PipelineError::SettingsLookup(_) => "SettingsLookupError",
            PipelineError::Io(_) => "IoError",
            PipelineError::Interrupted(_) => "Interrupted",
        }
    }
}

impl From<StagingError> for PipelineError {
    fn from(err: StagingError) -> Self {
        match err {
            StagingError::Rejected { status } => PipelineError::Download(status),
            StagingError::Network(message) => PipelineError::Download(message),
            StagingError::Io(e) => PipelineError::Io(e),
        }
    }
}

impl From<NormalizeError> for PipelineError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::Unavailable { program, reason } => {
                PipelineError::EngineUnavailable(format!("{}: {}", program, reason))
            }
            NormalizeError::Failed { exit_code, stderr } => {
                PipelineError::Conversion { exit_code, stderr }
            }
        }
    }
}

impl From<InferenceError> for PipelineError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Unavailable(reason) => PipelineError::EngineUnavailable(reason),
            InferenceError::Failed {
                exit_code,
                stderr_tail,
            } => PipelineError::Inference {
                exit_code,
                stderr_tail,
            },
        }
    }
}

impl From<LimiterClosed> for PipelineError {
    fn from(err: LimiterClosed) -> Self {
        PipelineError::EngineUnavailable(err.to_string())
    }
}
