use axum::{
    Extension,
    extract::{Path, State},
};
use morsel_core::domain::insight::{ports::InsightService, value_objects::DismissInsightInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DismissInsightResponse {
    pub success: bool,
}

#[utoipa::path(
    post,
    path = "/{insight_id}/dismiss",
    tag = "insight",
    summary = "Dismiss an insight",
    params(
        ("insight_id" = Uuid, Path, description = "Insight id"),
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = DismissInsightResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn dismiss_insight(
    Path(insight_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<DismissInsightResponse>, ApiError> {
    state
        .service
        .dismiss_insight(DismissInsightInput {
            insight_id,
            user_id: user.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DismissInsightResponse { success: true }))
}
