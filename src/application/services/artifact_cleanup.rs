use std::io;
use std::path::Path;

use futures::future::join_all;

use crate::domain::StagedArtifacts;

/// Removes the raw source, normalized audio and structured result. The transcript
/// stays on success for later download and is removed on failure.
pub async fn release_artifacts(artifacts: &StagedArtifacts, succeeded: bool) {
    let transcript = (!succeeded).then(|| artifacts.transcript());
    let removals = artifacts
        .intermediates()
        .into_iter()
        .chain(transcript)
        .map(remove_artifact);

    join_all(removals).await;
}

async fn remove_artifact(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed job artifact"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Job artifact was never written")
        }
        Err(e) => tracing::warn!(
            error = %e,
            path = %path.display(),
            "Failed to remove job artifact"
        ),
    }
}
