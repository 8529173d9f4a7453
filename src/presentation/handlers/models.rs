use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::error_response;
use crate::domain::WhisperModel;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ModelEntry {
    pub id: String,
    pub file_name: String,
}

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelEntry>,
    pub current: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetModelRequest {
    pub model: String,
}

pub async fn models_handler(State(state): State<AppState>) -> impl IntoResponse {
    let current = match state.settings_store.current_model().await {
        Ok(current) => current,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read current model");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read current model: {}", e),
            );
        }
    };

    let models = WhisperModel::all()
        .iter()
        .map(|model| ModelEntry {
            id: model.as_str().to_string(),
            file_name: model.file_name(),
        })
        .collect();

    (StatusCode::OK, Json(ModelsResponse { models, current })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn set_model_handler(
    State(state): State<AppState>,
    Json(body): Json<SetModelRequest>,
) -> impl IntoResponse {
    let model = match body.model.parse::<WhisperModel>() {
        Ok(model) => model,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.settings_store.set_current_model(model).await {
        Ok(()) => {
            tracing::info!(model = %model, "Current whisper model updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to update current model");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to update model: {}", e),
            )
        }
    }
}
