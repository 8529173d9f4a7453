use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub inference_capacity: usize,
    pub inference_available: usize,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let limiter = state.pipeline.limiter();
    let status = if limiter.is_closed() {
        "shutting_down"
    } else {
        "healthy"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            inference_capacity: limiter.capacity(),
            inference_available: limiter.available(),
        }),
    )
}
