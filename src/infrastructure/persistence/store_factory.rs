use std::sync::Arc;

use crate::application::ports::{AuditStore, AuditStoreError, SettingsStore};
use crate::domain::WhisperModel;
use crate::presentation::config::{AuditProviderSetting, AuditSettings, ModelSettings};

use super::memory_stores::{InMemoryAuditStore, StaticSettingsStore};
use super::pg_audit_store::PgAuditStore;
use super::pg_pool::{create_pool, run_migrations};
use super::pg_settings_store::PgSettingsStore;

pub struct Stores {
    pub audit: Arc<dyn AuditStore>,
    pub settings: Arc<dyn SettingsStore>,
}

pub struct StoreFactory;

impl StoreFactory {
    pub async fn create(
        audit: &AuditSettings,
        models: &ModelSettings,
    ) -> Result<Stores, AuditStoreError> {
        let default_model = match models.default.as_deref() {
            Some(id) => Some(
                id.parse::<WhisperModel>()
                    .map_err(AuditStoreError::Misconfigured)?,
            ),
            None => None,
        };

        match audit.provider {
            AuditProviderSetting::Memory => {
                tracing::info!("Using in-memory audit and settings stores");
                Ok(Stores {
                    audit: Arc::new(InMemoryAuditStore::new()),
                    settings: Arc::new(StaticSettingsStore::new(
                        default_model.map(|m| m.as_str().to_string()),
                    )),
                })
            }
            AuditProviderSetting::Postgres => {
                let url = audit.database_url.as_deref().ok_or_else(|| {
                    AuditStoreError::Misconfigured("audit.database_url required".into())
                })?;
                let pool = create_pool(url, audit.max_connections).await?;
                run_migrations(&pool).await?;

                let settings = PgSettingsStore::new(pool.clone());
                if let Some(model) = default_model {
                    settings
                        .seed_model(model)
                        .await
                        .map_err(|e| AuditStoreError::ConnectionFailed(e.to_string()))?;
                }

                Ok(Stores {
                    audit: Arc::new(PgAuditStore::new(pool)),
                    settings: Arc::new(settings),
                })
            }
        }
    }
}
