use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{SettingsStore, SettingsStoreError};
use crate::domain::WhisperModel;

const MODEL_SETTING_KEY: &str = "whisperModel";
const MODEL_SETTING_DESCRIPTION: &str = "Currently active Whisper model for transcriptions";

pub struct PgSettingsStore {
    pool: PgPool,
}

impl PgSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts `model` only when no model has been configured yet.
    #[instrument(skip(self))]
    pub async fn seed_model(&self, model: WhisperModel) -> Result<(), SettingsStoreError> {
        sqlx::query(
            r#"
            INSERT INTO app_settings (key, value, description, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (key) DO NOTHING
            "#,
        )
        .bind(MODEL_SETTING_KEY)
        .bind(model.as_str())
        .bind(MODEL_SETTING_DESCRIPTION)
        .execute(&self.pool)
        .await
        .map_err(|e| SettingsStoreError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    #[instrument(skip(self))]
    async fn current_model(&self) -> Result<Option<String>, SettingsStoreError> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM app_settings WHERE key = $1")
                .bind(MODEL_SETTING_KEY)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| SettingsStoreError::QueryFailed(e.to_string()))?;

        Ok(value.filter(|v| !v.trim().is_empty()))
    }

    #[instrument(skip(self, model), fields(model = %model))]
    async fn set_current_model(&self, model: WhisperModel) -> Result<(), SettingsStoreError> {
        sqlx::query(
            r#"
            INSERT INTO app_settings (key, value, description, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(MODEL_SETTING_KEY)
        .bind(model.as_str())
        .bind(MODEL_SETTING_DESCRIPTION)
        .execute(&self.pool)
        .await
        .map_err(|e| SettingsStoreError::QueryFailed(e.to_string()))?;

        tracing::info!("Whisper model updated");
        Ok(())
    }
}
