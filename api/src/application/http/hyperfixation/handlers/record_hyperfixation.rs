use axum::{Extension, extract::State};
use morsel_core::domain::hyperfixation::{
    entities::Hyperfixation, ports::HyperfixationService, value_objects::RecordHyperfixationInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        hyperfixation::validators::RecordHyperfixationValidator,
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
pub struct RecordHyperfixationResponse {
    pub data: Hyperfixation,
}

#[utoipa::path(
    post,
    path = "",
    tag = "hyperfixation",
    summary = "Record a hyperfixation",
    description = "Opens a record for the food, or returns the one already active.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = RecordHyperfixationValidator,
    responses(
        (status = 200, body = RecordHyperfixationResponse),
        (status = 400, description = "Bad request")
    )
)]
pub async fn record_hyperfixation(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<RecordHyperfixationValidator>,
) -> Result<Response<RecordHyperfixationResponse>, ApiError> {
    let hyperfixation = state
        .service
        .record_hyperfixation(RecordHyperfixationInput {
            user_id: user.user_id,
            food_name: payload.food_name,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecordHyperfixationResponse {
        data: hyperfixation,
    }))
}
