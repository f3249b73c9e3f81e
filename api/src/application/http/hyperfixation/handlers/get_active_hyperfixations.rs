use axum::{Extension, extract::State};
use morsel_core::domain::hyperfixation::{entities::Hyperfixation, ports::HyperfixationService};
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
pub struct GetActiveHyperfixationsResponse {
    pub data: Vec<Hyperfixation>,
}

#[utoipa::path(
    get,
    path = "/active",
    tag = "hyperfixation",
    summary = "List active hyperfixations",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetActiveHyperfixationsResponse)
    )
)]
pub async fn get_active_hyperfixations(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetActiveHyperfixationsResponse>, ApiError> {
    let data = state
        .service
        .get_active_hyperfixations(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetActiveHyperfixationsResponse { data }))
}
