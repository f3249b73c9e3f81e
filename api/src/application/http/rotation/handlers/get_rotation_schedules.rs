use axum::{
    Extension,
    extract::{Query, State},
};
use morsel_core::domain::rotation::{
    entities::RotationSchedule, ports::RotationService, value_objects::GetRotationSchedulesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        rotation::validators::RotationScheduleQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRotationSchedulesResponse {
    pub data: Vec<RotationSchedule>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "rotation",
    summary = "List rotation schedules",
    params(
        RotationScheduleQuery,
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetRotationSchedulesResponse)
    )
)]
pub async fn get_rotation_schedules(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<RotationScheduleQuery>,
) -> Result<Response<GetRotationSchedulesResponse>, ApiError> {
    let data = state
        .service
        .get_rotation_schedules(
            user.user_id,
            GetRotationSchedulesFilter {
                active_only: query.active_only,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRotationSchedulesResponse { data }))
}
