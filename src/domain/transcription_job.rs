use chrono::{DateTime, Utc};

use super::{ChatId, JobId};

#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub id: JobId,
    pub chat_id: ChatId,
    pub source_url: String,
    pub mime_type: String,
    pub file_name: String,
    pub duration: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptionJob {
    pub fn new(
        chat_id: ChatId,
        source_url: String,
        mime_type: String,
        file_name: String,
        duration: String,
        model: String,
    ) -> Self {
        Self {
            id: JobId::new(),
            chat_id,
            source_url,
            mime_type,
            file_name,
            duration,
            model,
            created_at: Utc::now(),
        }
    }
}
