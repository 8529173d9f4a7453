mod artifact_cleanup;
mod concurrency_limiter;
mod metrics_recorder;
mod pipeline_error;
mod progress_reporter;
mod result_assembler;
mod transcription_pipeline;

pub use artifact_cleanup::release_artifacts;
pub use concurrency_limiter::{ConcurrencyLimiter, LimiterClosed};
pub use metrics_recorder::MetricsRecorder;
pub use pipeline_error::PipelineError;
pub use progress_reporter::{ProgressReporter, ProgressSession};
pub use result_assembler::{assemble_result, detect_language};
pub use transcription_pipeline::{PipelineConfig, TranscriptionPipeline, TranscriptionRequest};
