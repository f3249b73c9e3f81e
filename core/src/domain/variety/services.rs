use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    common::{entities::app_errors::CoreError, retry::retry_idempotent, services::Service},
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::{entities::FrequencyWindow, ports::FrequencyRepository},
    health::ports::HealthCheckRepository,
    hyperfixation::ports::HyperfixationRepository,
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
    variety::{
        entities::VarietyReport,
        ports::VarietyService,
        scoring::{TOP_FOOD_LIMIT, suggested_messages, top_food_shares, variety_score},
    },
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> VarietyService
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
    #[instrument(skip(self))]
    async fn get_variety_report(&self, user_id: Uuid) -> Result<VarietyReport, CoreError> {
        let now = Utc::now();
        let frequencies = &self.frequency_repository;

        let unique_7d = retry_idempotent("count_unique_foods_7d", || {
            frequencies.count_unique_foods(user_id, FrequencyWindow::SevenDays, now)
        })
        .await?;
        let unique_30d = retry_idempotent("count_unique_foods_30d", || {
            frequencies.count_unique_foods(user_id, FrequencyWindow::ThirtyDays, now)
        })
        .await?;
        let total_events = retry_idempotent("count_events_30d", || {
            frequencies.count_events(user_id, FrequencyWindow::ThirtyDays, now)
        })
        .await?;
        let counts = retry_idempotent("top_foods_30d", || {
            frequencies.top_foods(user_id, FrequencyWindow::ThirtyDays, now, TOP_FOOD_LIMIT)
        })
        .await?;
        let active_hyperfixations = retry_idempotent("get_active_hyperfixations", || {
            self.hyperfixation_repository.get_active_by_user(user_id)
        })
        .await?;

        let top_foods = top_food_shares(counts, total_events);
        let active = active_hyperfixations.len();

        Ok(VarietyReport {
            unique_7d,
            unique_30d,
            suggested_messages: suggested_messages(&top_foods, active),
            variety_score: variety_score(unique_7d, unique_30d, active),
            top_foods,
            active_hyperfixations,
        })
    }
}
