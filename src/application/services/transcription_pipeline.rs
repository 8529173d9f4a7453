use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::Instrument;

use crate::application::ports::{
    AudioNormalizer, AuditStore, ChatNotifier, FileStager, InferenceEngine, InferenceRequest,
    SettingsStore,
};
use crate::domain::{
    ChatId, MessageTarget, MetricsRecord, StagedArtifacts, TranscriptionJob, TranscriptionOutcome,
    TranscriptionResult, WhisperModel,
};

use super::artifact_cleanup::release_artifacts;
use super::concurrency_limiter::ConcurrencyLimiter;
use super::metrics_recorder::MetricsRecorder;
use super::progress_reporter::ProgressReporter;
use super::result_assembler::assemble_result;
use super::PipelineError;

const UNRESOLVED_MODEL: &str = "unresolved";

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub chat_id: ChatId,
    pub target: MessageTarget,
    pub source_url: String,
    pub mime_type: String,
    pub file_name: String,
    pub duration: String,
    /// Overrides the settings store when present.
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub storage_root: PathBuf,
    pub progress_interval: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("./data"),
            progress_interval: Duration::from_secs(2),
        }
    }
}

pub struct TranscriptionPipeline {
    stages: Arc<PipelineStages>,
}

struct PipelineStages {
    stager: Arc<dyn FileStager>,
    normalizer: Arc<dyn AudioNormalizer>,
    engine: Arc<dyn InferenceEngine>,
    notifier: Arc<dyn ChatNotifier>,
    settings: Arc<dyn SettingsStore>,
    metrics: MetricsRecorder,
    reporter: ProgressReporter,
    limiter: ConcurrencyLimiter,
    storage_root: PathBuf,
}

impl TranscriptionPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stager: Arc<dyn FileStager>,
        normalizer: Arc<dyn AudioNormalizer>,
        engine: Arc<dyn InferenceEngine>,
        notifier: Arc<dyn ChatNotifier>,
        settings: Arc<dyn SettingsStore>,
        audit_store: Arc<dyn AuditStore>,
        limiter: ConcurrencyLimiter,
        config: PipelineConfig,
    ) -> Self {
        Self {
            stages: Arc::new(PipelineStages {
                stager,
                normalizer,
                engine,
                reporter: ProgressReporter::new(Arc::clone(&notifier), config.progress_interval),
                notifier,
                settings,
                metrics: MetricsRecorder::new(audit_store),
                limiter,
                storage_root: config.storage_root,
            }),
        }
    }

    pub fn limiter(&self) -> &ConcurrencyLimiter {
        &self.stages.limiter
    }

    pub fn storage_root(&self) -> &Path {
        &self.stages.storage_root
    }

    /// Caller-facing variant: failures are logged and collapse to `None`.
    pub async fn handle(&self, request: TranscriptionRequest) -> Option<TranscriptionResult> {
        let chat_id = request.chat_id;
        match self.transcribe(request).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!(error = %e, chat_id = %chat_id, "Transcription request failed");
                None
            }
        }
    }

    /// The job runs on its own task: dropping the returned future does not cancel it,
    /// so cleanup and the audit write still happen once.
    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult, PipelineError> {
        let stages = Arc::clone(&self.stages);
        tokio::spawn(async move { stages.transcribe(request).await })
            .await
            .map_err(|e| PipelineError::Interrupted(e.to_string()))?
    }
}

impl PipelineStages {
    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult, PipelineError> {
        let model = self.resolve_model(request.model.as_deref()).await;
        let model_label = match &model {
            Ok(m) => m.as_str().to_string(),
            Err(_) => request
                .model
                .clone()
                .unwrap_or_else(|| UNRESOLVED_MODEL.to_string()),
        };

        let job = TranscriptionJob::new(
            request.chat_id,
            request.source_url,
            request.mime_type,
            request.file_name,
            request.duration,
            model_label,
        );
        let artifacts = StagedArtifacts::new(&self.storage_root, job.chat_id, job.id);

        let span = tracing::info_span!(
            "transcription_job",
            job_id = %job.id,
            chat_id = %job.chat_id,
            model = %job.model,
        );

        self.execute(&job, &artifacts, request.target, model)
            .instrument(span)
            .await
    }

    async fn execute(
        &self,
        job: &TranscriptionJob,
        artifacts: &StagedArtifacts,
        target: MessageTarget,
        model: Result<WhisperModel, PipelineError>,
    ) -> Result<TranscriptionResult, PipelineError> {
        tracing::info!(
            file_name = %job.file_name,
            mime_type = %job.mime_type,
            base_name = %artifacts.base_name(),
            "Transcription job started"
        );
        self.notify_started(job, &target).await;

        let mut downloaded_bytes = 0;
        let result = match model {
            Ok(model) => match self.stager.stage(&job.source_url, artifacts.raw_source()).await {
                Ok(bytes) => {
                    downloaded_bytes = bytes;
                    self.process_staged(job, model, artifacts, target).await
                }
                Err(e) => Err(e.into()),
            },
            Err(e) => Err(e),
        };

        let outcome = match &result {
            Ok(r) => TranscriptionOutcome::succeeded(r),
            Err(e) => TranscriptionOutcome::failed(e.to_string()),
        };
        self.metrics
            .record(MetricsRecord::new(job, downloaded_bytes, Utc::now(), &outcome))
            .await;
        release_artifacts(artifacts, outcome.success).await;

        match &result {
            Ok(r) => {
                tracing::info!(
                    language = r.language.as_deref().unwrap_or("unknown"),
                    file = %r.file_name,
                    "Transcription job completed"
                );
                self.notify_completed(job, &target, r.language.as_deref())
                    .await;
            }
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Transcription job failed");
            }
        }

        result
    }

    async fn process_staged(
        &self,
        job: &TranscriptionJob,
        model: WhisperModel,
        artifacts: &StagedArtifacts,
        target: MessageTarget,
    ) -> Result<TranscriptionResult, PipelineError> {
        tracing::debug!("Normalizing source audio");
        self.normalizer
            .normalize(artifacts.raw_source(), artifacts.normalized_audio())
            .await?;

        tracing::debug!(
            available = self.limiter.available(),
            "Waiting for inference slot"
        );
        let session = self.reporter.start(job, target);
        let request = InferenceRequest {
            audio: artifacts.normalized_audio(),
            output_base: artifacts.raw_source(),
            model,
        };
        let inference = self
            .limiter
            .submit(self.engine.run(request, &session))
            .await;
        session.finish().await;
        inference??;

        tracing::debug!("Assembling transcription result");
        assemble_result(artifacts).await
    }

    async fn resolve_model(&self, requested: Option<&str>) -> Result<WhisperModel, PipelineError> {
        let identifier = match requested {
            Some(id) => id.to_string(),
            None => self
                .settings
                .current_model()
                .await
                .map_err(|e| PipelineError::SettingsLookup(e.to_string()))?
                .ok_or_else(|| PipelineError::SettingsLookup("no model configured".to_string()))?,
        };

        identifier
            .parse::<WhisperModel>()
            .map_err(PipelineError::SettingsLookup)
    }

    async fn notify_started(&self, job: &TranscriptionJob, target: &MessageTarget) {
        if let Err(e) = self
            .notifier
            .processing_started(target, &job.file_name, &job.duration)
            .await
        {
            tracing::warn!(error = %e, "Processing-started notification dropped");
        }
    }

    async fn notify_completed(
        &self,
        job: &TranscriptionJob,
        target: &MessageTarget,
        language: Option<&str>,
    ) {
        if let Err(e) = self
            .notifier
            .completed(target, &job.file_name, &job.duration, language)
            .await
        {
            tracing::warn!(error = %e, "Completion notification dropped");
        }
    }
}
