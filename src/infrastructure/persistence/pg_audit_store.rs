use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{AuditStore, AuditStoreError};
use crate::domain::MetricsRecord;

pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    #[instrument(skip(self, record), fields(job_id = %record.job_id))]
    async fn append(&self, record: &MetricsRecord) -> Result<(), AuditStoreError> {
        let file_size_bytes = i64::try_from(record.file_size_bytes).unwrap_or(i64::MAX);

        sqlx::query(
            r#"
            INSERT INTO transcription_metrics (
                job_id, chat_id, file_name, file_size_bytes, mime_type, model,
                started_at, finished_at, duration_secs, success, language, error_message
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(record.job_id.as_uuid())
        .bind(record.chat_id.as_i64())
        .bind(&record.file_name)
        .bind(file_size_bytes)
        .bind(&record.mime_type)
        .bind(&record.model)
        .bind(record.started_at)
        .bind(record.finished_at)
        .bind(record.duration_secs)
        .bind(record.success)
        .bind(&record.language)
        .bind(&record.error_message)
        .execute(&self.pool)
        .await
        .map_err(|e| AuditStoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}
