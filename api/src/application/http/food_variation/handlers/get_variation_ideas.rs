use axum::extract::{Path, State};
use morsel_core::domain::food_variation::{entities::FoodVariation, ports::FoodVariationService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetVariationIdeasResponse {
    pub data: Vec<FoodVariation>,
}

#[utoipa::path(
    get,
    path = "/{food_name}/variations",
    tag = "food-variation",
    summary = "List variation ideas for a food",
    description = "Curated small changes (sauce, preparation, brand, shape, side) for a food. Unknown foods return an empty list.",
    params(
        ("food_name" = String, Path, description = "Food name, case-insensitive"),
    ),
    responses(
        (status = 200, body = GetVariationIdeasResponse)
    )
)]
pub async fn get_variation_ideas(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetVariationIdeasResponse>, ApiError> {
    let data = state
        .service
        .get_variation_ideas(food_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetVariationIdeasResponse { data }))
}
