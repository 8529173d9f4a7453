use chrono::{DateTime, Utc};

use super::{ChatId, JobId, TranscriptionJob, TranscriptionOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    pub job_id: JobId,
    pub chat_id: ChatId,
    pub file_name: String,
    pub file_size_bytes: u64,
    pub mime_type: String,
    pub model: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_secs: i64,
    pub success: bool,
    pub language: Option<String>,
    pub error_message: Option<String>,
}

impl MetricsRecord {
    pub fn new(
        job: &TranscriptionJob,
        file_size_bytes: u64,
        finished_at: DateTime<Utc>,
        outcome: &TranscriptionOutcome,
    ) -> Self {
        let (language, error_message) = if outcome.success {
            (outcome.language.clone(), None)
        } else {
            (None, outcome.error.clone())
        };

        Self {
            job_id: job.id,
            chat_id: job.chat_id,
            file_name: job.file_name.clone(),
            file_size_bytes,
            mime_type: job.mime_type.clone(),
            model: job.model.clone(),
            started_at: job.created_at,
            finished_at,
            duration_secs: rounded_seconds(job.created_at, finished_at),
            success: outcome.success,
            language,
            error_message,
        }
    }
}

fn rounded_seconds(started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> i64 {
    let millis = (finished_at - started_at).num_milliseconds();
    (millis as f64 / 1000.0).round() as i64
}
