use tracing::{info, instrument};
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
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::{
        entities::RotationSchedule,
        ports::{RotationScheduleRepository, RotationService},
        value_objects::{
            CreateRotationScheduleInput, DeleteRotationScheduleInput, GetRotationSchedulesFilter,
            UpdateRotationScheduleInput,
        },
    },
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> RotationService
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
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn create_rotation_schedule(
        &self,
        input: CreateRotationScheduleInput,
    ) -> Result<RotationSchedule, CoreError> {
        let schedule = RotationSchedule::new(input)?;
        let schedule = self.rotation_schedule_repository.create(schedule).await?;

        info!(schedule_id = %schedule.id, "rotation schedule created");
        Ok(schedule)
    }

    async fn get_rotation_schedules(
        &self,
        user_id: Uuid,
        filter: GetRotationSchedulesFilter,
    ) -> Result<Vec<RotationSchedule>, CoreError> {
        retry_idempotent("get_rotation_schedules", || {
            self.rotation_schedule_repository
                .get_by_user(user_id, filter.clone())
        })
        .await
    }

    async fn get_rotation_schedule(
        &self,
        schedule_id: Uuid,
        user_id: Uuid,
    ) -> Result<RotationSchedule, CoreError> {
        retry_idempotent("get_rotation_schedule", || {
            self.rotation_schedule_repository.get_by_id(schedule_id, user_id)
        })
        .await?
        .ok_or(CoreError::NotFoundOrForbidden)
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, schedule_id = %input.schedule_id))]
    async fn update_rotation_schedule(
        &self,
        input: UpdateRotationScheduleInput,
    ) -> Result<RotationSchedule, CoreError> {
        let mut schedule = self
            .rotation_schedule_repository
            .get_by_id(input.schedule_id, input.user_id)
            .await?
            .ok_or(CoreError::NotFoundOrForbidden)?;

        schedule.apply(input)?;

        self.rotation_schedule_repository
            .update(schedule)
            .await?
            .ok_or(CoreError::NotFoundOrForbidden)
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, schedule_id = %input.schedule_id))]
    async fn delete_rotation_schedule(
        &self,
        input: DeleteRotationScheduleInput,
    ) -> Result<(), CoreError> {
        let deleted = self
            .rotation_schedule_repository
            .delete(input.schedule_id, input.user_id)
            .await?;

        if !deleted {
            return Err(CoreError::NotFoundOrForbidden);
        }

        info!("rotation schedule deleted");
        Ok(())
    }
}
