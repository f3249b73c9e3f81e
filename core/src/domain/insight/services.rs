use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    common::{
        entities::app_errors::CoreError, retry::retry_idempotent, services::Service,
        week_start_date,
    },
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::ports::FrequencyRepository,
    health::ports::HealthCheckRepository,
    hyperfixation::ports::HyperfixationRepository,
    insight::{
        entities::WeeklyInsight,
        ports::{InsightService, WeeklyInsightRepository},
        rules::qualifying_insights,
        value_objects::DismissInsightInput,
    },
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
    variety::ports::VarietyService,
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> InsightService
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
    async fn generate_weekly_insights(&self, user_id: Uuid) -> Result<Vec<WeeklyInsight>, CoreError> {
        let report = self.get_variety_report(user_id).await?;
        let week = week_start_date(Utc::now().date_naive());

        let mut insights = Vec::new();
        for (insight_type, message) in qualifying_insights(&report) {
            let insight = self
                .weekly_insight_repository
                .upsert(WeeklyInsight::new(user_id, week, insight_type, message))
                .await?;
            insights.push(insight);
        }

        info!(week = %week, generated = insights.len(), "weekly insights refreshed");
        Ok(insights)
    }

    async fn get_weekly_insights(
        &self,
        user_id: Uuid,
        week_start: Option<NaiveDate>,
    ) -> Result<Vec<WeeklyInsight>, CoreError> {
        let week = week_start_date(week_start.unwrap_or_else(|| Utc::now().date_naive()));

        retry_idempotent("get_weekly_insights", || {
            self.weekly_insight_repository.get_by_week(user_id, week)
        })
        .await
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, insight_id = %input.insight_id))]
    async fn dismiss_insight(&self, input: DismissInsightInput) -> Result<(), CoreError> {
        let dismissed = self
            .weekly_insight_repository
            .dismiss(input.insight_id, input.user_id)
            .await?;

        if !dismissed {
            return Err(CoreError::NotFoundOrForbidden);
        }
        Ok(())
    }
}
