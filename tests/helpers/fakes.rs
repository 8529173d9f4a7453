use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use scribe::application::ports::{
    AudioNormalizer, AuditStore, AuditStoreError, ChatNotifier, FileStager, InferenceEngine,
    InferenceError, InferenceRequest, NormalizeError, NotifierError, ProgressSink, StagingError,
};
use scribe::application::services::{
    ConcurrencyLimiter, PipelineConfig, TranscriptionPipeline, TranscriptionRequest,
};
use scribe::domain::{ChatId, MessageTarget, MetricsRecord};
use scribe::infrastructure::persistence::{InMemoryAuditStore, StaticSettingsStore};

pub const SOURCE_BYTES: &[u8] = b"RIFF-fake-audio";

pub enum StagerBehavior {
    Serve,
    Reject(&'static str),
}

pub struct FakeStager {
    behavior: StagerBehavior,
}

impl FakeStager {
    pub fn serving() -> Self {
        Self {
            behavior: StagerBehavior::Serve,
        }
    }

    pub fn rejecting(status: &'static str) -> Self {
        Self {
            behavior: StagerBehavior::Reject(status),
        }
    }
}

#[async_trait]
impl FileStager for FakeStager {
    async fn stage(&self, _source_url: &str, destination: &Path) -> Result<u64, StagingError> {
        if let Some(dir) = destination.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        match self.behavior {
            StagerBehavior::Serve => {
                tokio::fs::write(destination, SOURCE_BYTES).await?;
                Ok(SOURCE_BYTES.len() as u64)
            }
            StagerBehavior::Reject(status) => Err(StagingError::Rejected {
                status: status.to_string(),
            }),
        }
    }
}

pub struct FakeNormalizer {
    exit_code: Option<i32>,
}

impl FakeNormalizer {
    pub fn succeeding() -> Self {
        Self { exit_code: None }
    }

    pub fn failing_with(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
        }
    }
}

#[async_trait]
impl AudioNormalizer for FakeNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError> {
        if let Some(code) = self.exit_code {
            return Err(NormalizeError::Failed {
                exit_code: Some(code),
                stderr: "Invalid data found when processing input".to_string(),
            });
        }
        tokio::fs::copy(input, output)
            .await
            .map_err(|e| NormalizeError::Unavailable {
                program: "fake".to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EngineBehavior {
    Succeed,
    SucceedWithoutTranscript,
    Fail(i32),
}

pub struct FakeEngine {
    behavior: EngineBehavior,
    transcript: String,
    structured: Option<String>,
    progress_script: Vec<(Duration, u8)>,
    run_time: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeEngine {
    pub fn new(behavior: EngineBehavior) -> Self {
        Self {
            behavior,
            transcript: "Hello world".to_string(),
            structured: Some(r#"{"result":{"language":"en"}}"#.to_string()),
            progress_script: Vec::new(),
            run_time: Duration::ZERO,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = transcript.into();
        self
    }

    pub fn with_structured(mut self, structured: Option<&str>) -> Self {
        self.structured = structured.map(str::to_string);
        self
    }

    /// Each entry sleeps for the given delay, then reports the percentage.
    pub fn with_progress(mut self, script: Vec<(Duration, u8)>) -> Self {
        self.progress_script = script;
        self
    }

    pub fn with_run_time(mut self, run_time: Duration) -> Self {
        self.run_time = run_time;
        self
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FakeEngine {
    async fn write_outputs(&self, base: &Path) -> Result<(), InferenceError> {
        tokio::fs::write(with_suffix(base, "txt"), &self.transcript)
            .await
            .map_err(|e| InferenceError::Unavailable(e.to_string()))?;
        if let Some(structured) = &self.structured {
            tokio::fs::write(with_suffix(base, "json"), structured)
                .await
                .map_err(|e| InferenceError::Unavailable(e.to_string()))?;
        }
        Ok(())
    }
}

fn with_suffix(base: &Path, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", base.display(), extension))
}

#[async_trait]
impl InferenceEngine for FakeEngine {
    async fn run(
        &self,
        request: InferenceRequest<'_>,
        progress: &dyn ProgressSink,
    ) -> Result<(), InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        for (delay, percent) in &self.progress_script {
            tokio::time::sleep(*delay).await;
            progress.report(*percent);
        }
        tokio::time::sleep(self.run_time).await;

        let result = match self.behavior {
            EngineBehavior::Succeed => self.write_outputs(request.output_base).await,
            EngineBehavior::SucceedWithoutTranscript => Ok(()),
            EngineBehavior::Fail(code) => Err(InferenceError::Failed {
                exit_code: Some(code),
                stderr_tail: "whisper_init_from_file: failed to load model".to_string(),
            }),
        };

        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Started,
    Progress(u8),
    Completed(Option<String>),
}

#[derive(Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.lock().unwrap().clone()
    }

    pub fn progress_values(&self) -> Vec<u8> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Notification::Progress(percent) => Some(percent),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatNotifier for RecordingNotifier {
    async fn processing_started(
        &self,
        _target: &MessageTarget,
        _file_name: &str,
        _duration: &str,
    ) -> Result<(), NotifierError> {
        self.calls.lock().unwrap().push(Notification::Started);
        Ok(())
    }

    async fn progress(
        &self,
        _target: &MessageTarget,
        _file_name: &str,
        _duration: &str,
        percent: u8,
    ) -> Result<(), NotifierError> {
        self.calls.lock().unwrap().push(Notification::Progress(percent));
        Ok(())
    }

    async fn completed(
        &self,
        _target: &MessageTarget,
        _file_name: &str,
        _duration: &str,
        language: Option<&str>,
    ) -> Result<(), NotifierError> {
        self.calls
            .lock()
            .unwrap()
            .push(Notification::Completed(language.map(str::to_string)));
        Ok(())
    }
}

pub struct FailingAuditStore;

#[async_trait]
impl AuditStore for FailingAuditStore {
    async fn append(&self, _record: &MetricsRecord) -> Result<(), AuditStoreError> {
        Err(AuditStoreError::WriteFailed("relation does not exist".to_string()))
    }
}

pub struct Harness {
    pub pipeline: Arc<TranscriptionPipeline>,
    pub audit: Arc<InMemoryAuditStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub engine: Arc<FakeEngine>,
    pub settings: Arc<StaticSettingsStore>,
    pub root: tempfile::TempDir,
}

pub struct HarnessOptions {
    pub stager: Arc<dyn FileStager>,
    pub normalizer: Arc<dyn AudioNormalizer>,
    pub engine: FakeEngine,
    pub settings_model: Option<String>,
    pub audit: Option<Arc<dyn AuditStore>>,
    pub capacity: usize,
    pub progress_interval: Duration,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            stager: Arc::new(FakeStager::serving()),
            normalizer: Arc::new(FakeNormalizer::succeeding()),
            engine: FakeEngine::new(EngineBehavior::Succeed),
            settings_model: Some("base".to_string()),
            audit: None,
            capacity: 1,
            progress_interval: Duration::from_secs(2),
        }
    }
}

pub fn harness(options: HarnessOptions) -> Harness {
    let root = tempfile::TempDir::new().unwrap();
    let audit = Arc::new(InMemoryAuditStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = Arc::new(options.engine);
    let settings = Arc::new(StaticSettingsStore::new(options.settings_model));
    let audit_store: Arc<dyn AuditStore> = options
        .audit
        .unwrap_or_else(|| audit.clone() as Arc<dyn AuditStore>);

    let pipeline = Arc::new(TranscriptionPipeline::new(
        options.stager,
        options.normalizer,
        engine.clone(),
        notifier.clone(),
        settings.clone(),
        audit_store,
        ConcurrencyLimiter::new(options.capacity),
        PipelineConfig {
            storage_root: root.path().to_path_buf(),
            progress_interval: options.progress_interval,
        },
    ));

    Harness {
        pipeline,
        audit,
        notifier,
        engine,
        settings,
        root,
    }
}

pub fn request_for(chat_id: i64) -> TranscriptionRequest {
    let chat_id = ChatId::new(chat_id);
    TranscriptionRequest {
        chat_id,
        target: MessageTarget::new(chat_id, 77),
        source_url: "https://files.example/bot123:abc/voice/file_1.oga".to_string(),
        mime_type: "audio/ogg".to_string(),
        file_name: "voice.oga".to_string(),
        duration: "0:42".to_string(),
        model: None,
    }
}

/// Lists file names present in a chat's job directory.
pub fn files_in_chat_dir(root: &Path, chat_id: i64) -> Vec<String> {
    let dir = root.join("texts").join(chat_id.to_string());
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names
        }
        Err(_) => Vec::new(),
    }
}
