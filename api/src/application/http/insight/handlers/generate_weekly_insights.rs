use axum::{Extension, extract::State};
use morsel_core::domain::insight::{entities::WeeklyInsight, ports::InsightService};
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
pub struct GenerateWeeklyInsightsResponse {
    pub data: Vec<WeeklyInsight>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "insight",
    summary = "Generate this week's insights",
    description = "Idempotent: running it again in the same week refreshes the existing rows.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GenerateWeeklyInsightsResponse)
    )
)]
pub async fn generate_weekly_insights(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GenerateWeeklyInsightsResponse>, ApiError> {
    let data = state
        .service
        .generate_weekly_insights(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateWeeklyInsightsResponse { data }))
}
