use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use scribe::application::services::{ConcurrencyLimiter, PipelineConfig, TranscriptionPipeline};
use scribe::infrastructure::audio::{FfmpegNormalizer, WhisperCliEngine};
use scribe::infrastructure::notifications::LogChatNotifier;
use scribe::infrastructure::observability::{TracingConfig, init_tracing};
use scribe::infrastructure::persistence::StoreFactory;
use scribe::infrastructure::storage::HttpFileStager;
use scribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let stores = StoreFactory::create(&settings.audit, &settings.models)
        .await
        .context("Failed to initialize stores")?;

    let limiter = ConcurrencyLimiter::new(settings.inference.max_concurrent);
    tracing::info!(
        capacity = limiter.capacity(),
        model_dir = %settings.inference.model_dir.display(),
        "Inference limiter ready"
    );

    let pipeline = Arc::new(TranscriptionPipeline::new(
        Arc::new(HttpFileStager::new()),
        Arc::new(FfmpegNormalizer::new(settings.normalizer.program.clone())),
        Arc::new(WhisperCliEngine::new(
            settings.inference.program.clone(),
            settings.inference.model_dir.clone(),
            settings.inference.threads,
        )),
        Arc::new(LogChatNotifier),
        Arc::clone(&stores.settings),
        stores.audit,
        limiter.clone(),
        PipelineConfig {
            storage_root: settings.storage.root.clone(),
            progress_interval: settings.inference.progress_interval(),
        },
    ));

    let router = create_router(AppState::new(pipeline, stores.settings));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(limiter))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(limiter: ConcurrencyLimiter) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown requested, closing inference limiter");
    limiter.close();
}
