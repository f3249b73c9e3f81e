use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::get_variety_report::{__path_get_variety_report, get_variety_report};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(get_variety_report))]
pub struct VarietyApiDoc;

pub fn variety_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/variety-report", state.args.server.root_path),
            get(get_variety_report),
        )
        .layer(middleware::from_fn(user_middleware))
}
