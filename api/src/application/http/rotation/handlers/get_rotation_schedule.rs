use axum::{
    Extension,
    extract::{Path, State},
};
use morsel_core::domain::rotation::{entities::RotationSchedule, ports::RotationService};
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
pub struct GetRotationScheduleResponse {
    pub data: RotationSchedule,
}

#[utoipa::path(
    get,
    path = "/{schedule_id}",
    tag = "rotation",
    summary = "Get rotation schedule",
    params(
        ("schedule_id" = Uuid, Path, description = "Schedule id"),
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetRotationScheduleResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_rotation_schedule(
    Path(schedule_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetRotationScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .get_rotation_schedule(schedule_id, user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRotationScheduleResponse { data: schedule }))
}
