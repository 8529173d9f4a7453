use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioNormalizer, NormalizeError};

pub const TARGET_SAMPLE_RATE: u32 = 16_000;

pub struct FfmpegNormalizer {
    program: String,
}

impl FfmpegNormalizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resample to 16 kHz, down-mix to mono, encode as s16le PCM, overwrite silently.
    pub fn build_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-hide_banner".to_owned(),
            "-loglevel".to_owned(),
            "error".to_owned(),
            "-nostdin".to_owned(),
            "-y".to_owned(),
            "-i".to_owned(),
            input.display().to_string(),
            "-ar".to_owned(),
            TARGET_SAMPLE_RATE.to_string(),
            "-ac".to_owned(),
            "1".to_owned(),
            "-c:a".to_owned(),
            "pcm_s16le".to_owned(),
            output.display().to_string(),
        ]
    }
}

#[async_trait]
impl AudioNormalizer for FfmpegNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError> {
        let args = Self::build_args(input, output);
        tracing::debug!(program = %self.program, args = ?args, "Starting audio conversion");

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| NormalizeError::Unavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            tracing::warn!(
                exit_code = ?result.status.code(),
                stderr = %stderr,
                "Audio conversion failed"
            );
            return Err(NormalizeError::Failed {
                exit_code: result.status.code(),
                stderr,
            });
        }

        tracing::debug!(output = %output.display(), "Audio normalized");
        Ok(())
    }
}
