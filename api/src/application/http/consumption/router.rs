use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_frequencies::{__path_get_frequencies, get_frequencies},
    record_consumption::{__path_record_consumption, record_consumption},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(record_consumption, get_frequencies))]
pub struct ConsumptionApiDoc;

pub fn consumption_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/consumptions", root_path), post(record_consumption))
        .route(&format!("{}/consumptions/frequencies", root_path), get(get_frequencies))
        .layer(middleware::from_fn(user_middleware))
}
