use axum::extract::State;
use morsel_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct HealthReadyResponse {
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Round trips to the database.",
    responses(
        (status = 200, body = HealthReadyResponse),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<HealthReadyResponse>, ApiError> {
    let data = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthReadyResponse { data }))
}
