use async_trait::async_trait;

use crate::domain::WhisperModel;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Raw model identifier as stored, `None` when nothing is configured.
    async fn current_model(&self) -> Result<Option<String>, SettingsStoreError>;

    async fn set_current_model(&self, model: WhisperModel) -> Result<(), SettingsStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
