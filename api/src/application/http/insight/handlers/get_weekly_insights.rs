use axum::{
    Extension,
    extract::{Query, State},
};
use morsel_core::domain::insight::{entities::WeeklyInsight, ports::InsightService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        insight::validators::WeeklyInsightsQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWeeklyInsightsResponse {
    pub data: Vec<WeeklyInsight>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "insight",
    summary = "List weekly insights",
    description = "Insights of the week that have not been dismissed.",
    params(
        WeeklyInsightsQuery,
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetWeeklyInsightsResponse)
    )
)]
pub async fn get_weekly_insights(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<WeeklyInsightsQuery>,
) -> Result<Response<GetWeeklyInsightsResponse>, ApiError> {
    let data = state
        .service
        .get_weekly_insights(user.user_id, query.week_start_date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWeeklyInsightsResponse { data }))
}
