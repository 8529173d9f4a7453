use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::application::ports::{ChatNotifier, ProgressSink};
use crate::domain::{JobId, MessageTarget, ProgressEvent, ProgressThrottle, TranscriptionJob};

pub struct ProgressReporter {
    notifier: Arc<dyn ChatNotifier>,
    min_interval: Duration,
}

impl ProgressReporter {
    pub fn new(notifier: Arc<dyn ChatNotifier>, min_interval: Duration) -> Self {
        Self {
            notifier,
            min_interval,
        }
    }

    /// Starts a per-job session. Forwarded events are delivered one at a time by a
    /// dedicated task, so a slow notifier never stalls the engine's output reader.
    pub fn start(&self, job: &TranscriptionJob, target: MessageTarget) -> ProgressSession {
        let (sender, mut receiver) = mpsc::unbounded_channel::<ProgressEvent>();
        let notifier = Arc::clone(&self.notifier);
        let file_name = job.file_name.clone();
        let duration = job.duration.clone();

        let worker = tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                if let Err(e) = notifier
                    .progress(&event.target, &file_name, &duration, event.percent)
                    .await
                {
                    tracing::warn!(
                        error = %e,
                        job_id = %event.job_id,
                        percent = event.percent,
                        "Progress update dropped"
                    );
                }
            }
        });

        ProgressSession {
            job_id: job.id,
            target,
            throttle: Mutex::new(ProgressThrottle::new(self.min_interval)),
            sender,
            worker,
        }
    }
}

pub struct ProgressSession {
    job_id: JobId,
    target: MessageTarget,
    throttle: Mutex<ProgressThrottle>,
    sender: mpsc::UnboundedSender<ProgressEvent>,
    worker: JoinHandle<()>,
}

impl ProgressSession {
    /// Waits until every forwarded update has been handed to the notifier.
    pub async fn finish(self) {
        let ProgressSession { sender, worker, .. } = self;
        drop(sender);
        if let Err(e) = worker.await {
            tracing::warn!(error = %e, "Progress worker terminated abnormally");
        }
    }
}

impl ProgressSink for ProgressSession {
    fn report(&self, percent: u8) {
        let now = Instant::now().into_std();
        let admitted = match self.throttle.lock() {
            Ok(mut throttle) => throttle.admit(percent, now),
            Err(poisoned) => poisoned.into_inner().admit(percent, now),
        };
        if !admitted {
            return;
        }

        tracing::debug!(percent, "Forwarding progress");
        let event = ProgressEvent::new(self.job_id, self.target, percent);
        if self.sender.send(event).is_err() {
            tracing::debug!(percent, "Progress worker already stopped");
        }
    }
}
