mod audio_normalizer;
mod audit_store;
mod chat_notifier;
mod file_stager;
mod inference_engine;
mod settings_store;

pub use audio_normalizer::{AudioNormalizer, NormalizeError};
pub use audit_store::{AuditStore, AuditStoreError};
pub use chat_notifier::{ChatNotifier, NotifierError};
pub use file_stager::{FileStager, StagingError};
pub use inference_engine::{InferenceEngine, InferenceError, InferenceRequest, ProgressSink};
pub use settings_store::{SettingsStore, SettingsStoreError};
