mod audio_format;
mod chat_id;
mod inference_state;
mod job_id;
mod metrics_record;
mod outcome;
mod preview;
mod progress;
mod staged_artifacts;
mod transcription_job;
mod whisper_model;

pub use audio_format::AudioFormat;
pub use chat_id::{ChatId, MessageTarget};
pub use inference_state::InferenceState;
pub use job_id::JobId;
pub use metrics_record::MetricsRecord;
pub use outcome::{TranscriptionOutcome, TranscriptionResult};
pub use preview::{PREVIEW_CHAR_LIMIT, build_preview};
pub use progress::{ProgressEvent, ProgressThrottle, parse_progress_line};
pub use staged_artifacts::StagedArtifacts;
pub use transcription_job::TranscriptionJob;
pub use whisper_model::WhisperModel;
