use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    dismiss_insight::{__path_dismiss_insight, dismiss_insight},
    generate_weekly_insights::{__path_generate_weekly_insights, generate_weekly_insights},
    get_weekly_insights::{__path_get_weekly_insights, get_weekly_insights},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};

#[derive(OpenApi)]
#[openapi(paths(generate_weekly_insights, get_weekly_insights, dismiss_insight))]
pub struct InsightApiDoc;

pub fn insight_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/weekly-insights", root_path), get(get_weekly_insights))
        .route(
            &format!("{}/weekly-insights/generate", root_path),
            post(generate_weekly_insights),
        )
        .route(
            &format!("{}/weekly-insights/{{insight_id}}/dismiss", root_path),
            post(dismiss_insight),
        )
        .layer(middleware::from_fn(user_middleware))
}
