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
pub struct GetHyperfixationHistoryResponse {
    pub data: Vec<Hyperfixation>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "hyperfixation",
    summary = "List hyperfixation history",
    description = "Active and ended records, newest first.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetHyperfixationHistoryResponse)
    )
)]
pub async fn get_hyperfixation_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetHyperfixationHistoryResponse>, ApiError> {
    let data = state
        .service
        .get_hyperfixation_history(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHyperfixationHistoryResponse { data }))
}
