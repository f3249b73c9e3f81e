use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_variation_ideas::{__path_get_variation_ideas, get_variation_ideas};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_variation_ideas))]
pub struct FoodVariationApiDoc;

pub fn food_variation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/foods/{{food_name}}/variations", state.args.server.root_path),
        get(get_variation_ideas),
    )
}
