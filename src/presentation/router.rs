use axum::Router;
use axum::routing::{get, post, put};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::presentation::handlers::{
    health_handler, models_handler, set_model_handler, transcript_download_handler,
    transcription_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/transcriptions", post(transcription_handler))
        .route(
            "/api/v1/chats/{chat_id}/transcripts/{file_name}",
            get(transcript_download_handler),
        )
        .route("/api/v1/models", get(models_handler))
        .route("/api/v1/settings/model", put(set_model_handler))
        .layer(trace_layer)
        .with_state(state)
}
