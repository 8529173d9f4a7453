use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::application::ports::{InferenceEngine, InferenceError, InferenceRequest, ProgressSink};
use crate::domain::{InferenceState, WhisperModel, parse_progress_line};

const STDERR_TAIL_LINES: usize = 20;

/// Runs the whisper.cpp command-line binary, writing `<base>.txt` and `<base>.json`.
pub struct WhisperCliEngine {
    program: String,
    model_dir: PathBuf,
    threads: usize,
}

impl WhisperCliEngine {
    pub fn new(program: impl Into<String>, model_dir: impl Into<PathBuf>, threads: usize) -> Self {
        Self {
            program: program.into(),
            model_dir: model_dir.into(),
            threads: threads.max(1),
        }
    }

    pub fn model_path(&self, model: WhisperModel) -> PathBuf {
        self.model_dir.join(model.file_name())
    }

    pub fn build_args(&self, request: &InferenceRequest<'_>) -> Vec<String> {
        vec![
            "-m".to_owned(),
            self.model_path(request.model).display().to_string(),
            "-t".to_owned(),
            self.threads.to_string(),
            "-l".to_owned(),
            "auto".to_owned(),
            "-f".to_owned(),
            request.audio.display().to_string(),
            "-of".to_owned(),
            request.output_base.display().to_string(),
            "-otxt".to_owned(),
            "-ojf".to_owned(),
            "-pp".to_owned(),
        ]
    }
}

#[async_trait]
impl InferenceEngine for WhisperCliEngine {
    async fn run(
        &self,
        request: InferenceRequest<'_>,
        progress: &dyn ProgressSink,
    ) -> Result<(), InferenceError> {
        let mut state = InferenceState::Pending;

        let model_path = self.model_path(request.model);
        match tokio::fs::try_exists(&model_path).await {
            Ok(true) => {}
            Ok(false) => {
                advance(&mut state, InferenceState::Failed);
                return Err(InferenceError::Unavailable(format!(
                    "model file {} not found",
                    model_path.display()
                )));
            }
            Err(e) => {
                advance(&mut state, InferenceState::Failed);
                return Err(InferenceError::Unavailable(format!(
                    "model file {} inaccessible: {}",
                    model_path.display(),
                    e
                )));
            }
        }

        let args = self.build_args(&request);
        tracing::debug!(program = %self.program, args = ?args, "Spawning inference engine");

        let mut child = match Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                advance(&mut state, InferenceState::Failed);
                return Err(InferenceError::Unavailable(format!("{}: {}", self.program, e)));
            }
        };
        advance(&mut state, InferenceState::Running);

        let mut tail: VecDeque<String> = VecDeque::with_capacity(STDERR_TAIL_LINES);
        if let Some(stderr) = child.stderr.take() {
            let mut segments = BufReader::new(stderr).split(b'\n');
            loop {
                match segments.next_segment().await {
                    Ok(Some(segment)) => {
                        let line = String::from_utf8_lossy(&segment);
                        let line = line.trim_end();
                        if let Some(percent) = parse_progress_line(line) {
                            progress.report(percent);
                        }
                        if tail.len() == STDERR_TAIL_LINES {
                            tail.pop_front();
                        }
                        tail.push_back(line.to_string());
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "Lost engine diagnostic stream");
                        break;
                    }
                }
            }
        }

        let status = match child.wait().await {
            Ok(status) => status,
            Err(e) => {
                advance(&mut state, InferenceState::Failed);
                return Err(InferenceError::Unavailable(format!(
                    "waiting for {}: {}",
                    self.program, e
                )));
            }
        };

        if status.success() {
            advance(&mut state, InferenceState::Succeeded);
            Ok(())
        } else {
            advance(&mut state, InferenceState::Failed);
            Err(InferenceError::Failed {
                exit_code: status.code(),
                stderr_tail: Vec::from(tail).join("\n"),
            })
        }
    }
}

fn advance(state: &mut InferenceState, next: InferenceState) {
    if !state.can_transition_to(next) {
        tracing::warn!(from = %state, to = %next, "Unexpected inference state transition");
    }
    tracing::debug!(from = %state, to = %next, "Inference state transition");
    *state = next;
}
