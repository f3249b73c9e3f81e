use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    generate_suggestions::{__path_generate_suggestions, generate_suggestions},
    get_suggestion_history::{__path_get_suggestion_history, get_suggestion_history},
    record_feedback::{__path_record_feedback, record_feedback},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(generate_suggestions, get_suggestion_history, record_feedback))]
pub struct ChainSuggestionApiDoc;

pub fn chain_suggestion_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/chain-suggestions", root_path),
            get(get_suggestion_history).post(generate_suggestions),
        )
        .route(
            &format!("{}/chain-suggestions/{{suggestion_id}}/feedback", root_path),
            post(record_feedback),
        )
        .layer(middleware::from_fn(user_middleware))
}
