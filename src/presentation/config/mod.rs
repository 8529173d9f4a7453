mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuditProviderSetting, AuditSettings, InferenceSettings, LoggingSettings, ModelSettings,
    NormalizerSettings, ServerSettings, Settings, StorageSettings,
};
