use std::sync::Arc;

use crate::application::ports::SettingsStore;
use crate::application::services::TranscriptionPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranscriptionPipeline>,
    pub settings_store: Arc<dyn SettingsStore>,
}

impl AppState {
    pub fn new(pipeline: Arc<TranscriptionPipeline>, settings_store: Arc<dyn SettingsStore>) -> Self {
        Self {
            pipeline,
            settings_store,
        }
    }
}
