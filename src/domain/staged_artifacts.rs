use std::path::{Path, PathBuf};

use super::{ChatId, JobId};

const TEXTS_DIR: &str = "texts";
const TRANSCRIPT_EXTENSION: &str = "txt";

/// Files one job writes under `<root>/texts/<chat_id>/`, all named after the job id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedArtifacts {
    job_dir: PathBuf,
    base_name: String,
    raw_source: PathBuf,
    normalized_audio: PathBuf,
    structured_output: PathBuf,
    transcript: PathBuf,
}

impl StagedArtifacts {
    pub fn new(root: &Path, chat_id: ChatId, job_id: JobId) -> Self {
        let job_dir = Self::job_dir_for(root, chat_id);
        let base_name = job_id.base_name();
        Self {
            raw_source: job_dir.join(&base_name),
            normalized_audio: job_dir.join(format!("{}.wav", base_name)),
            structured_output: job_dir.join(format!("{}.json", base_name)),
            transcript: job_dir.join(format!("{}.{}", base_name, TRANSCRIPT_EXTENSION)),
            job_dir,
            base_name,
        }
    }

    pub fn job_dir_for(root: &Path, chat_id: ChatId) -> PathBuf {
        root.join(TEXTS_DIR).join(chat_id.to_string())
    }

    /// Resolves a retained transcript by the file name handed out on completion.
    /// Returns `None` for names that could escape the chat directory.
    pub fn resolve_transcript(root: &Path, chat_id: ChatId, file_name: &str) -> Option<PathBuf> {
        let stem = file_name.strip_suffix(&format!(".{}", TRANSCRIPT_EXTENSION))?;
        let is_plain_name = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_plain_name {
            return None;
        }
        Some(Self::job_dir_for(root, chat_id).join(file_name))
    }

    pub fn job_dir(&self) -> &Path {
        &self.job_dir
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Also the prefix the engine appends `.txt` and `.json` to.
    pub fn raw_source(&self) -> &Path {
        &self.raw_source
    }

    pub fn normalized_audio(&self) -> &Path {
        &self.normalized_audio
    }

    pub fn structured_output(&self) -> &Path {
        &self.structured_output
    }

    pub fn transcript(&self) -> &Path {
        &self.transcript
    }

    pub fn transcript_file_name(&self) -> String {
        format!("{}.{}", self.base_name, TRANSCRIPT_EXTENSION)
    }

    pub fn intermediates(&self) -> [&Path; 3] {
        [
            &self.raw_source,
            &self.normalized_audio,
            &self.structured_output,
        ]
    }
}
