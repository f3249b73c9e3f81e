use axum::{Extension, extract::State};
use morsel_core::domain::variety::{entities::VarietyReport, ports::VarietyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetVarietyReportResponse {
    pub data: VarietyReport,
}

#[utoipa::path(
    get,
    path = "",
    tag = "variety",
    summary = "Get the variety report",
    description = "Unique foods over the last 7 and 30 days, the most eaten foods, active hyperfixations and a 1 to 10 variety score.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetVarietyReportResponse)
    )
)]
pub async fn get_variety_report(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetVarietyReportResponse>, ApiError> {
    let data = state
        .service
        .get_variety_report(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetVarietyReportResponse { data }))
}
