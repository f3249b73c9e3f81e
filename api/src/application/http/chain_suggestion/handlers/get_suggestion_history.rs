use axum::{
    Extension,
    extract::{Query, State},
};
use morsel_core::domain::chain_suggestion::{
    entities::ChainSuggestion, ports::ChainSuggestionService,
    value_objects::GetSuggestionHistoryFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        chain_suggestion::validators::SuggestionHistoryQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSuggestionHistoryResponse {
    pub data: Vec<ChainSuggestion>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "chain-suggestion",
    summary = "List suggestion history",
    description = "Previously generated suggestions, newest first, optionally for one food.",
    params(
        SuggestionHistoryQuery,
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetSuggestionHistoryResponse)
    )
)]
pub async fn get_suggestion_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<SuggestionHistoryQuery>,
) -> Result<Response<GetSuggestionHistoryResponse>, ApiError> {
    let data = state
        .service
        .get_suggestion_history(
            user.user_id,
            GetSuggestionHistoryFilter {
                food_name: query.food_name,
                limit: query.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSuggestionHistoryResponse { data }))
}
