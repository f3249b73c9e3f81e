use axum::{Extension, extract::State};
use morsel_core::domain::rotation::{
    entities::RotationSchedule, ports::RotationService, value_objects::CreateRotationScheduleInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        rotation::validators::CreateRotationScheduleValidator,
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
pub struct CreateRotationScheduleResponse {
    pub data: RotationSchedule,
}

#[utoipa::path(
    post,
    path = "",
    tag = "rotation",
    summary = "Create rotation schedule",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = CreateRotationScheduleValidator,
    responses(
        (status = 201, body = CreateRotationScheduleResponse),
        (status = 400, description = "Bad request")
    )
)]
pub async fn create_rotation_schedule(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<CreateRotationScheduleValidator>,
) -> Result<Response<CreateRotationScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .create_rotation_schedule(CreateRotationScheduleInput {
            user_id: user.user_id,
            name: payload.name,
            description: payload.description,
            rotation_period_days: payload.rotation_period_days,
            foods: payload.foods.into_iter().map(Into::into).collect(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRotationScheduleResponse {
        data: schedule,
    }))
}
