use axum::{Extension, extract::State};
use morsel_core::domain::nutrition_settings::{
    entities::NutritionSettings, ports::NutritionSettingsService,
    value_objects::UpdateNutritionSettingsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        nutrition_settings::validators::UpdateNutritionSettingsValidator,
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
pub struct UpdateNutritionSettingsResponse {
    pub data: NutritionSettings,
}

#[utoipa::path(
    put,
    path = "",
    tag = "nutrition-settings",
    summary = "Update nutrition settings",
    params(
        ("X-User-Id" = String, Header, description = "Caller id"),
    ),
    request_body = UpdateNutritionSettingsValidator,
    responses(
        (status = 200, body = UpdateNutritionSettingsResponse)
    )
)]
pub async fn update_nutrition_settings(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<UpdateNutritionSettingsValidator>,
) -> Result<Response<UpdateNutritionSettingsResponse>, ApiError> {
    let settings = state
        .service
        .update_nutrition_settings(UpdateNutritionSettingsInput {
            user_id: user.user_id,
            track_calories: payload.track_calories,
            track_macros: payload.track_macros,
            track_micronutrients: payload.track_micronutrients,
            show_nutrition_in_recipes: payload.show_nutrition_in_recipes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateNutritionSettingsResponse { data: settings }))
}
