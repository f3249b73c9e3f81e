use axum::{Extension, extract::State};
use morsel_core::domain::chain_suggestion::{
    entities::ChainSuggestion, ports::ChainSuggestionService,
    value_objects::GenerateSuggestionsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        chain_suggestion::validators::GenerateSuggestionsValidator,
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
pub struct GenerateSuggestionsResponse {
    pub data: Vec<ChainSuggestion>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chain-suggestion",
    summary = "Generate food chaining suggestions",
    description = "Returns up to `count` ranked substitutes for the food. Untried suggestions from earlier calls are reused before new ones are generated.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = GenerateSuggestionsValidator,
    responses(
        (status = 200, body = GenerateSuggestionsResponse),
        (status = 400, description = "Invalid count")
    )
)]
pub async fn generate_suggestions(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<GenerateSuggestionsValidator>,
) -> Result<Response<GenerateSuggestionsResponse>, ApiError> {
    let data = state
        .service
        .generate_suggestions(GenerateSuggestionsInput {
            user_id: user.user_id,
            food_name: payload.food_name,
            count: payload.count,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateSuggestionsResponse { data }))
}
