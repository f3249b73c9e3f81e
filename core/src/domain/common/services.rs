use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::ports::FrequencyRepository,
    health::ports::HealthCheckRepository,
    hyperfixation::{entities::HyperfixationRule, ports::HyperfixationRepository},
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
};

/// Implements every service port of the engine over a set of repositories
/// and a suggestion backend.
#[derive(Clone)]
pub struct Service<F, H, CS, FP, FV, RS, WI, NS, HC, SB>
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
    pub(crate) frequency_repository: F,
    pub(crate) hyperfixation_repository: H,
    pub(crate) chain_suggestion_repository: CS,
    pub(crate) food_profile_repository: FP,
    pub(crate) food_variation_repository: FV,
    pub(crate) rotation_schedule_repository: RS,
    pub(crate) weekly_insight_repository: WI,
    pub(crate) nutrition_settings_repository: NS,
    pub(crate) health_check_repository: HC,
    pub(crate) suggestion_backend: SB,
    pub(crate) hyperfixation_rule: HyperfixationRule,
}

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> Service<F, H, CS, FP, FV, RS, WI, NS, HC, SB>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        frequency_repository: F,
        hyperfixation_repository: H,
        chain_suggestion_repository: CS,
        food_profile_repository: FP,
        food_variation_repository: FV,
        rotation_schedule_repository: RS,
        weekly_insight_repository: WI,
        nutrition_settings_repository: NS,
        health_check_repository: HC,
        suggestion_backend: SB,
    ) -> Self {
        Self {
            frequency_repository,
            hyperfixation_repository,
            chain_suggestion_repository,
            food_profile_repository,
            food_variation_repository,
            rotation_schedule_repository,
            weekly_insight_repository,
            nutrition_settings_repository,
            health_check_repository,
            suggestion_backend,
            hyperfixation_rule: HyperfixationRule::default(),
        }
    }
}
