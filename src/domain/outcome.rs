use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    pub file_name: String,
    pub transcript_path: PathBuf,
    pub preview_text: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionOutcome {
    pub success: bool,
    pub file: Option<String>,
    pub preview_text: Option<String>,
    pub language: Option<String>,
    pub error: Option<String>,
}

impl TranscriptionOutcome {
    pub fn succeeded(result: &TranscriptionResult) -> Self {
        Self {
            success: true,
            file: Some(result.file_name.clone()),
            preview_text: Some(result.preview_text.clone()),
            language: result.language.clone(),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            file: None,
            preview_text: None,
            language: None,
            error: Some(error.into()),
        }
    }
}
