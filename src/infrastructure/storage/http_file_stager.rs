use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{FileStager, StagingError};
use crate::infrastructure::observability::sanitize_url;

pub struct HttpFileStager {
    client: reqwest::Client,
}

impl HttpFileStager {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFileStager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStager for HttpFileStager {
    async fn stage(&self, source_url: &str, destination: &Path) -> Result<u64, StagingError> {
        if let Some(job_dir) = destination.parent() {
            tokio::fs::create_dir_all(job_dir).await?;
        }

        tracing::debug!(source = %sanitize_url(source_url), "Downloading source audio");

        // Chat platform file links carry credentials in the path, so errors drop the URL.
        let response = self
            .client
            .get(source_url)
            .send()
            .await
            .map_err(|e| StagingError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = %status,
                source = %sanitize_url(source_url),
                "Source download rejected"
            );
            return Err(StagingError::Rejected {
                status: status.to_string(),
            });
        }

        let mut file = tokio::fs::File::create(destination).await?;
        let mut stream = response.bytes_stream();
        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| StagingError::Network(e.without_url().to_string()))?;
            total_bytes += bytes.len() as u64;
            file.write_all(&bytes).await?;
        }
        file.flush().await?;

        tracing::info!(
            bytes = total_bytes,
            path = %destination.display(),
            "Source audio staged"
        );

        Ok(total_bytes)
    }
}
