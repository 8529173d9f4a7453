use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use super::error_response::error_response;
use crate::domain::{ChatId, StagedArtifacts};
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn transcript_download_handler(
    State(state): State<AppState>,
    Path((chat_id, file_name)): Path<(i64, String)>,
) -> impl IntoResponse {
    let Some(path) = StagedArtifacts::resolve_transcript(
        state.pipeline.storage_root(),
        ChatId::new(chat_id),
        &file_name,
    ) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid transcript name: {}", file_name),
        );
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(text) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file_name),
                ),
            ],
            text,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => error_response(
            StatusCode::NOT_FOUND,
            format!("Transcript not found: {}", file_name),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read transcript");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read transcript: {}", e),
            )
        }
    }
}
