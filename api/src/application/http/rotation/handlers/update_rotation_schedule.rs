use axum::{
    Extension,
    extract::{Path, State},
};
use morsel_core::domain::rotation::{
    entities::RotationSchedule, ports::RotationService, value_objects::UpdateRotationScheduleInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::{
        rotation::validators::UpdateRotationScheduleValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRotationScheduleResponse {
    pub data: RotationSchedule,
}

#[utoipa::path(
    put,
    path = "/{schedule_id}",
    tag = "rotation",
    summary = "Update rotation schedule",
    description = "Applies the provided fields; omitted fields keep their value.",
    params(
        ("schedule_id" = Uuid, Path, description = "Schedule id"),
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = UpdateRotationScheduleValidator,
    responses(
        (status = 200, body = UpdateRotationScheduleResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_rotation_schedule(
    Path(schedule_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<UpdateRotationScheduleValidator>,
) -> Result<Response<UpdateRotationScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .update_rotation_schedule(UpdateRotationScheduleInput {
            schedule_id,
            user_id: user.user_id,
            name: payload.name,
            description: payload.description,
            rotation_period_days: payload.rotation_period_days,
            foods: payload
                .foods
                .map(|foods| foods.into_iter().map(Into::into).collect()),
            is_active: payload.is_active,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRotationScheduleResponse { data: schedule }))
}
