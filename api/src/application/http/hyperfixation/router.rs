use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    end_hyperfixation::{__path_end_hyperfixation, end_hyperfixation},
    get_active_hyperfixations::{__path_get_active_hyperfixations, get_active_hyperfixations},
    get_hyperfixation_history::{__path_get_hyperfixation_history, get_hyperfixation_history},
    record_hyperfixation::{__path_record_hyperfixation, record_hyperfixation},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(
    get_active_hyperfixations,
    get_hyperfixation_history,
    record_hyperfixation,
    end_hyperfixation
))]
pub struct HyperfixationApiDoc;

pub fn hyperfixation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/hyperfixations", root_path),
            get(get_hyperfixation_history).post(record_hyperfixation),
        )
        .route(
            &format!("{}/hyperfixations/active", root_path),
            get(get_active_hyperfixations),
        )
        .route(
            &format!("{}/hyperfixations/{{hyperfixation_id}}/end", root_path),
            post(end_hyperfixation),
        )
        .layer(middleware::from_fn(user_middleware))
}
