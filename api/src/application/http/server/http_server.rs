use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use morsel_core::{application::create_service, domain::common::MorselConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    application::{
        http::{
            chain_suggestion::router::chain_suggestion_routes,
            consumption::router::consumption_routes,
            food_variation::router::food_variation_routes, health::router::health_routes,
            hyperfixation::router::hyperfixation_routes, insight::router::insight_routes,
            nutrition_settings::router::nutrition_settings_routes,
            rotation::router::rotation_routes,
            server::{app_state::AppState, openapi::ApiDoc},
            variety::router::variety_routes,
        },
        user_middleware::USER_ID_HEADER,
    },
    args::Args,
};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = MorselConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {}: {}", origin, e);
                None
            }
        })
        .collect()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = allowed_origins(&state.args.server.allowed_origins);
    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            HeaderName::from_static(USER_ID_HEADER),
        ]);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(format!("{}/api-docs/openapi.json", root_path), openapi),
        )
        .merge(consumption_routes(state.clone()))
        .merge(hyperfixation_routes(state.clone()))
        .merge(chain_suggestion_routes(state.clone()))
        .merge(food_variation_routes(state.clone()))
        .merge(variety_routes(state.clone()))
        .merge(rotation_routes(state.clone()))
        .merge(insight_routes(state.clone()))
        .merge(nutrition_settings_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origins_are_skipped() {
        let origins = allowed_origins(&[
            "http://localhost:5173".to_string(),
            "bad\norigin".to_string(),
        ]);

        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:5173")]);
    }
}
