use axum::{
    Extension,
    extract::{Path, State},
};
use morsel_core::domain::rotation::{
    ports::RotationService, value_objects::DeleteRotationScheduleInput,
};
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
pub struct DeleteRotationScheduleResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{schedule_id}",
    tag = "rotation",
    summary = "Delete rotation schedule",
    params(
        ("schedule_id" = Uuid, Path, description = "Schedule id"),
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = DeleteRotationScheduleResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_rotation_schedule(
    Path(schedule_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<DeleteRotationScheduleResponse>, ApiError> {
    state
        .service
        .delete_rotation_schedule(DeleteRotationScheduleInput {
            schedule_id,
            user_id: user.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRotationScheduleResponse { success: true }))
}
