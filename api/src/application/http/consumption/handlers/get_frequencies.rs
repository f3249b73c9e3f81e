use axum::{Extension, extract::State};
use morsel_core::domain::frequency::{entities::FrequencySnapshot, ports::FrequencyService};
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
pub struct GetFrequenciesResponse {
    pub data: Vec<FrequencySnapshot>,
}

#[utoipa::path(
    get,
    path = "/frequencies",
    tag = "frequency",
    summary = "List food frequencies",
    description = "Per-food rolling counts for the caller, most eaten in the last 30 days first.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetFrequenciesResponse)
    )
)]
pub async fn get_frequencies(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetFrequenciesResponse>, ApiError> {
    let data = state
        .service
        .get_frequencies(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFrequenciesResponse { data }))
}
