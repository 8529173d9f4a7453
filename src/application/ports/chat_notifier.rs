use async_trait::async_trait;

use crate::domain::MessageTarget;

#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn processing_started(
        &self,
        target: &MessageTarget,
        file_name: &str,
        duration: &str,
    ) -> Result<(), NotifierError>;

    async fn progress(
        &self,
        target: &MessageTarget,
        file_name: &str,
        duration: &str,
        percent: u8,
    ) -> Result<(), NotifierError>;

    async fn completed(
        &self,
        target: &MessageTarget,
        file_name: &str,
        duration: &str,
        language: Option<&str>,
    ) -> Result<(), NotifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}
