use axum::{Extension, extract::State};
use morsel_core::domain::nutrition_settings::{
    entities::NutritionSettings, ports::NutritionSettingsService,
};
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
pub struct GetNutritionSettingsResponse {
    pub data: NutritionSettings,
}

#[utoipa::path(
    get,
    path = "",
    tag = "nutrition-settings",
    summary = "Get nutrition settings",
    description = "Every tracking flag is off until the user turns it on.",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    responses(
        (status = 200, body = GetNutritionSettingsResponse)
    )
)]
pub async fn get_nutrition_settings(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetNutritionSettingsResponse>, ApiError> {
    let settings = state
        .service
        .get_nutrition_settings(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetNutritionSettingsResponse { data: settings }))
}
