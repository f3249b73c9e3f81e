use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    common::{
        entities::app_errors::CoreError, normalize_food_name, retry::retry_idempotent,
        services::Service,
    },
    food_profile::ports::FoodProfileRepository,
    food_variation::{
        entities::FoodVariation,
        ports::{FoodVariationRepository, FoodVariationService},
    },
    frequency::ports::FrequencyRepository,
    health::ports::HealthCheckRepository,
    hyperfixation::ports::HyperfixationRepository,
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> FoodVariationService
    for Service<F, H, CS, FP, FV, RS, WI, NS, HC, SB>
where
    F: FrequencyRepository,
    H: HyperfixationRepository,
    CS: ChainSuggestionRepository,
    FP: FoodProfileRepository,
    FV: FoodVariationRepository,
    RS: RotationScheduleRepository,
    WI: WeeklyInsightRepository,
    NS: NutritionSettingsRepository,
    HC: HealthCheckRepository,
    SB: SuggestionBackend,
{
    async fn get_variation_ideas(&self, food_name: String) -> Result<Vec<FoodVariation>, CoreError> {
        let food_name = normalize_food_name(&food_name);
        if food_name.is_empty() {
            return Ok(Vec::new());
        }

        retry_idempotent("get_variation_ideas", || {
            self.food_variation_repository.get_by_food_name(food_name.clone())
        })
        .await
    }
}
