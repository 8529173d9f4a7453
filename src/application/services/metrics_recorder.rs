use std::sync::Arc;

use crate::application::ports::AuditStore;
use crate::domain::MetricsRecord;

pub struct MetricsRecorder {
    store: Arc<dyn AuditStore>,
}

impl MetricsRecorder {
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    /// Persists the record once. A store failure is logged and never alters the
    /// job's outcome.
    pub async fn record(&self, record: MetricsRecord) -> bool {
        match self.store.append(&record).await {
            Ok(()) => {
                tracing::debug!(
                    job_id = %record.job_id,
                    success = record.success,
                    duration_secs = record.duration_secs,
                    "Transcription metrics recorded"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    job_id = %record.job_id,
                    "Failed to persist transcription metrics"
                );
                false
            }
        }
    }
}
