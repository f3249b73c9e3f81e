use axum::extract::State;
use morsel_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthLiveResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthLiveResponse),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<HealthLiveResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthLiveResponse {
        status: "ok".to_string(),
        response_time_ms,
    }))
}
