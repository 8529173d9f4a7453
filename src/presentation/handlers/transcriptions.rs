use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::error_response;
use crate::application::services::TranscriptionRequest;
use crate::domain::{AudioFormat, ChatId, MessageTarget, TranscriptionOutcome};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranscriptionRequestBody {
    pub chat_id: i64,
    pub message_id: i64,
    pub source_url: String,
    pub mime_type: String,
    pub file_name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionOutcomeResponse {
    pub success: bool,
    pub file: Option<String>,
    pub preview_text: Option<String>,
    pub language: Option<String>,
    pub error: Option<String>,
}

impl From<TranscriptionOutcome> for TranscriptionOutcomeResponse {
    fn from(outcome: TranscriptionOutcome) -> Self {
        Self {
            success: outcome.success,
            file: outcome.file,
            preview_text: outcome.preview_text,
            language: outcome.language,
            error: outcome.error,
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn transcription_handler(
    State(state): State<AppState>,
    Json(body): Json<TranscriptionRequestBody>,
) -> impl IntoResponse {
    if AudioFormat::from_mime(&body.mime_type).is_none() {
        tracing::warn!(mime_type = %body.mime_type, "Rejected unsupported media type");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported media type: {}", body.mime_type),
        );
    }

    let chat_id = ChatId::new(body.chat_id);
    let request = TranscriptionRequest {
        chat_id,
        target: MessageTarget::new(chat_id, body.message_id),
        source_url: body.source_url,
        mime_type: body.mime_type,
        file_name: body.file_name,
        duration: body.duration,
        model: body.model,
    };

    match state.pipeline.transcribe(request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(TranscriptionOutcomeResponse::from(
                TranscriptionOutcome::succeeded(&result),
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(TranscriptionOutcomeResponse::from(
                TranscriptionOutcome::failed(e.to_string()),
            )),
        )
            .into_response(),
    }
}
