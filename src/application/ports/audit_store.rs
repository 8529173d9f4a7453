use async_trait::async_trait;

use crate::domain::MetricsRecord;

/// Append-only sink for per-attempt metrics.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn append(&self, record: &MetricsRecord) -> Result<(), AuditStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuditStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("misconfigured: {0}")]
    Misconfigured(String),
}
