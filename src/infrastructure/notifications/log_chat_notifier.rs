use async_trait::async_trait;

use crate::application::ports::{ChatNotifier, NotifierError};
use crate::domain::MessageTarget;

/// Notifier for deployments where message edits are handled by an external bot
/// process tailing the structured log.
pub struct LogChatNotifier;

#[async_trait]
impl ChatNotifier for LogChatNotifier {
    async fn processing_started(
        &self,
        target: &MessageTarget,
        file_name: &str,
        duration: &str,
    ) -> Result<(), NotifierError> {
        tracing::info!(
            chat_id = %target.chat_id,
            message_id = target.message_id,
            file_name,
            duration,
            "notify: processing started"
        );
        Ok(())
    }

    async fn progress(
        &self,
        target: &MessageTarget,
        file_name: &str,
        duration: &str,
        percent: u8,
    ) -> Result<(), NotifierError> {
        tracing::info!(
            chat_id = %target.chat_id,
            message_id = target.message_id,
            file_name,
            duration,
            percent,
            "notify: progress"
        );
        Ok(())
    }

    async fn completed(
        &self,
        target: &MessageTarget,
        file_name: &str,
        duration: &str,
        language: Option<&str>,
    ) -> Result<(), NotifierError> {
        tracing::info!(
            chat_id = %target.chat_id,
            message_id = target.message_id,
            file_name,
            duration,
            language = language.unwrap_or("unknown"),
            "notify: completed"
        );
        Ok(())
    }
}
