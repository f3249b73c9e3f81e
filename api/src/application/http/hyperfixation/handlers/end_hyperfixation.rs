use axum::{
    Extension,
    extract::{Path, State},
};
use morsel_core::domain::hyperfixation::{
    entities::Hyperfixation, ports::HyperfixationService, value_objects::EndHyperfixationInput,
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
pub struct EndHyperfixationResponse {
    pub data: Hyperfixation,
}

#[utoipa::path(
    post,
    path = "/{hyperfixation_id}/end",
    tag = "hyperfixation",
    summary = "End a hyperfixation",
    params(
        ("hyperfixation_id" = Uuid, Path, description = "Hyperfixation id"),
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = EndHyperfixationResponse),
        (status = 400, description = "Already ended"),
        (status = 404, description = "Not found")
    )
)]
pub async fn end_hyperfixation(
    Path(hyperfixation_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<EndHyperfixationResponse>, ApiError> {
    let hyperfixation = state
        .service
        .end_hyperfixation(EndHyperfixationInput {
            user_id: user.user_id,
            hyperfixation_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EndHyperfixationResponse {
        data: hyperfixation,
    }))
}
