use utoipa::OpenApi;

use crate::application::http::{
    chain_suggestion::router::ChainSuggestionApiDoc, consumption::router::ConsumptionApiDoc,
    food_variation::router::FoodVariationApiDoc, health::router::HealthApiDoc,
    hyperfixation::router::HyperfixationApiDoc, insight::router::InsightApiDoc,
    nutrition_settings::router::NutritionSettingsApiDoc, rotation::router::RotationApiDoc,
    variety::router::VarietyApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Morsel API"
    ),
    nest(
        (path = "/consumptions", api = ConsumptionApiDoc),
        (path = "/hyperfixations", api = HyperfixationApiDoc),
        (path = "/chain-suggestions", api = ChainSuggestionApiDoc),
        (path = "/foods", api = FoodVariationApiDoc),
        (path = "/variety-report", api = VarietyApiDoc),
        (path = "/rotation-schedules", api = RotationApiDoc),
        (path = "/weekly-insights", api = InsightApiDoc),
        (path = "/nutrition-settings", api = NutritionSettingsApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        for expected in [
            "/consumptions",
            "/consumptions/frequencies",
            "/hyperfixations/active",
            "/hyperfixations/{hyperfixation_id}/end",
            "/chain-suggestions/{suggestion_id}/feedback",
            "/foods/{food_name}/variations",
            "/variety-report",
            "/rotation-schedules/{schedule_id}",
            "/weekly-insights/{insight_id}/dismiss",
            "/nutrition-settings",
            "/health/ready",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
