use serde_json::Value;

use crate::domain::{StagedArtifacts, TranscriptionResult, build_preview};

use super::PipelineError;

/// Reads the engine outputs once it has exited successfully. The transcript is
/// mandatory; a missing or malformed structured result only loses the language.
pub async fn assemble_result(
    artifacts: &StagedArtifacts,
) -> Result<TranscriptionResult, PipelineError> {
    let (structured, transcript) = tokio::join!(
        tokio::fs::read_to_string(artifacts.structured_output()),
        tokio::fs::read_to_string(artifacts.transcript()),
    );

    let transcript = transcript.map_err(|e| {
        PipelineError::Integrity(format!(
            "transcript {} unreadable after successful inference: {}",
            artifacts.transcript().display(),
            e
        ))
    })?;

    let language = match structured {
        Ok(raw) => detect_language(&raw),
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %artifacts.structured_output().display(),
                "Structured result unreadable, language unknown"
            );
            None
        }
    };

    Ok(TranscriptionResult {
        file_name: artifacts.transcript_file_name(),
        transcript_path: artifacts.transcript().to_path_buf(),
        preview_text: build_preview(&transcript),
        language,
    })
}

/// Language code from the engine's JSON, at `result.language` or top-level `language`.
pub fn detect_language(raw: &str) -> Option<String> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "Structured result is not valid JSON");
            return None;
        }
    };

    value
        .pointer("/result/language")
        .or_else(|| value.get("language"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
}
