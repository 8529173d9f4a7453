use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::application::ports::{AuditStore, AuditStoreError, SettingsStore, SettingsStoreError};
use crate::domain::{MetricsRecord, WhisperModel};

#[derive(Default)]
pub struct InMemoryAuditStore {
    records: Mutex<Vec<MetricsRecord>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<MetricsRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append(&self, record: &MetricsRecord) -> Result<(), AuditStoreError> {
        self.records
            .lock()
            .map_err(|e| AuditStoreError::WriteFailed(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}

/// Settings held in process memory, seeded from configuration.
#[derive(Default)]
pub struct StaticSettingsStore {
    model: RwLock<Option<String>>,
}

impl StaticSettingsStore {
    pub fn new(model: Option<String>) -> Self {
        Self {
            model: RwLock::new(model),
        }
    }
}

#[async_trait]
impl SettingsStore for StaticSettingsStore {
    async fn current_model(&self) -> Result<Option<String>, SettingsStoreError> {
        let model = self
            .model
            .read()
            .map_err(|e| SettingsStoreError::QueryFailed(e.to_string()))?;
        Ok(model.clone())
    }

    async fn set_current_model(&self, model: WhisperModel) -> Result<(), SettingsStoreError> {
        let mut current = self
            .model
            .write()
            .map_err(|e| SettingsStoreError::QueryFailed(e.to_string()))?;
        *current = Some(model.as_str().to_string());
        Ok(())
    }
}
