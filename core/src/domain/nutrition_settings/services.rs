use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    common::{entities::app_errors::CoreError, retry::retry_idempotent, services::Service},
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::ports::FrequencyRepository,
    health::ports::HealthCheckRepository,
    hyperfixation::ports::HyperfixationRepository,
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::{
        entities::NutritionSettings,
        ports::{NutritionSettingsRepository, NutritionSettingsService},
        value_objects::UpdateNutritionSettingsInput,
    },
    rotation::ports::RotationScheduleRepository,
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> NutritionSettingsService
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
    async fn get_nutrition_settings(&self, user_id: Uuid) -> Result<NutritionSettings, CoreError> {
        let stored = retry_idempotent("get_nutrition_settings", || {
            self.nutrition_settings_repository.get_by_user(user_id)
        })
        .await?;

        Ok(stored.unwrap_or_else(|| NutritionSettings::new(user_id)))
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn update_nutrition_settings(
        &self,
        input: UpdateNutritionSettingsInput,
    ) -> Result<NutritionSettings, CoreError> {
        let mut settings = self
            .nutrition_settings_repository
            .get_by_user(input.user_id)
            .await?
            .unwrap_or_else(|| NutritionSettings::new(input.user_id));

        settings.apply(&input);

        self.nutrition_settings_repository.upsert(settings).await
    }
}
