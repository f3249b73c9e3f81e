use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_nutrition_settings::{__path_get_nutrition_settings, get_nutrition_settings},
    update_nutrition_settings::{__path_update_nutrition_settings, update_nutrition_settings},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(get_nutrition_settings, update_nutrition_settings))]
pub struct NutritionSettingsApiDoc;

pub fn nutrition_settings_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition-settings", state.args.server.root_path),
            get(get_nutrition_settings).put(update_nutrition_settings),
        )
        .layer(middleware::from_fn(user_middleware))
}
